use crate::foundation::core::Position;

/// Evenly spaced, horizontally centered slot centers for `count` symbols.
///
/// `start_x = (width - count*spacing)/2 + spacing/2` and every slot sits at mid-height. All
/// divisions floor (toward negative infinity), so rows wider than the canvas still lay out
/// reproducibly.
pub fn compute_positions(count: usize, width: u32, height: u32, spacing: u32) -> Vec<Position> {
    let spacing = i64::from(spacing);
    let total_width = count as i64 * spacing;
    let start_x = (i64::from(width) - total_width).div_euclid(2) + spacing.div_euclid(2);
    let y = i64::from(height).div_euclid(2);

    (0..count as i64)
        .map(|i| Position::new(to_px(start_x + i * spacing), to_px(y)))
        .collect()
}

fn to_px(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
