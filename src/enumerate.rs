use crate::mask::ResultMask;

/// Widest configuration the enumerator accepts. The result mask then holds
/// 65536 bits.
pub const MAX_SIGNAL_LINES: usize = 16;

/// The low `width` bits set.
pub const fn width_mask(width: usize) -> u32 {
    if width >= u32::BITS as usize {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Whether `combination` satisfies the configuration.
///
/// Every bit of `required_present` must be set in `combination` and every bit
/// of `required_absent` must be clear. The complement of `combination` is
/// taken over `width` bits only.
pub fn matches(
    combination: u32,
    required_present: u32,
    required_absent: u32,
    width: usize,
) -> bool {
    let absent = !combination & width_mask(width);

    (combination & required_present) == required_present
        && (absent & required_absent) == required_absent
}

/// Builds the mask of all combinations of `width` signal lines that satisfy
/// `required_present` and `required_absent`.
///
/// Contradictory constraints (a line both present and absent, or a
/// requirement above `width`) produce an empty mask.
///
/// # Panics
///
/// If `width` exceeds [`MAX_SIGNAL_LINES`].
pub fn enumerate(
    required_present: u32,
    required_absent: u32,
    width: usize,
) -> ResultMask {
    assert!(width <= MAX_SIGNAL_LINES, "unsupported width {width}");

    let mut mask = ResultMask::empty(width);

    for combination in 0..1_u32 << width {
        if matches(combination, required_present, required_absent, width) {
            mask.set(combination as usize);
        }
    }

    mask
}
