//! Pure geometry for the three transform methods.
//!
//! All functions here are pure and testable without any I/O or images.

/// Largest dimensions preserving `source`'s aspect ratio that fit within
/// `target`.
///
/// Scales up as well as down; the result never exceeds `target` on either
/// axis and every edge is at least one pixel.
///
/// # Examples
/// ```
/// # use storefit::imaging::fit_dimensions;
/// // Small wide source fills the target width, padded vertically
/// assert_eq!(fit_dimensions((100, 50), (1280, 800)), (1280, 640));
///
/// // Full HD shrinks until the width fits
/// assert_eq!(fit_dimensions((1920, 1080), (1280, 800)), (1280, 720));
/// ```
pub fn fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let scale = (tgt_w as f64 / src_w as f64).min(tgt_h as f64 / src_h as f64);

    let w = ((src_w as f64 * scale).round() as u32).clamp(1, tgt_w);
    let h = ((src_h as f64 * scale).round() as u32).clamp(1, tgt_h);
    (w, h)
}

/// Top-left offset that centers `inner` within `outer`.
///
/// Axes where `inner` meets or exceeds `outer` get offset 0.
pub fn center_offset(inner: (u32, u32), outer: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}

/// Centered crop rectangle with `target`'s aspect ratio.
///
/// Returns `(x, y, width, height)` in source coordinates. The relatively
/// longer source dimension is trimmed symmetrically; the other is kept
/// whole. Resizing the returned rectangle to `target` fills it exactly,
/// with no padding.
pub fn crop_rect(source: (u32, u32), target: (u32, u32)) -> (u32, u32, u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is relatively wider: keep the full height, trim the sides
        let crop_w = ((src_h as f64 * tgt_aspect).round() as u32).clamp(1, src_w);
        let x = (src_w - crop_w) / 2;
        (x, 0, crop_w, src_h)
    } else {
        // Source is relatively taller: keep the full width, trim top and bottom
        let crop_h = ((src_w as f64 / tgt_aspect).round() as u32).clamp(1, src_h);
        let y = (src_h - crop_h) / 2;
        (0, y, src_w, crop_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // fit_dimensions tests
    // =========================================================================

    #[test]
    fn fit_upscales_small_source_to_bounds() {
        // The canonical store screenshot case: 100x50 fills 1280 wide
        assert_eq!(fit_dimensions((100, 50), (1280, 800)), (1280, 640));
    }

    #[test]
    fn fit_downscales_wider_source() {
        // 1920x1080 (16:9) into 1280x800 (16:10): width binds
        assert_eq!(fit_dimensions((1920, 1080), (1280, 800)), (1280, 720));
    }

    #[test]
    fn fit_downscales_taller_source() {
        // Portrait source: height binds
        assert_eq!(fit_dimensions((500, 1000), (1280, 800)), (400, 800));
    }

    #[test]
    fn fit_exact_aspect_match_fills_target() {
        assert_eq!(fit_dimensions((640, 400), (1280, 800)), (1280, 800));
    }

    #[test]
    fn fit_identity_when_already_target_size() {
        assert_eq!(fit_dimensions((1280, 800), (1280, 800)), (1280, 800));
    }

    #[test]
    fn fit_never_exceeds_target() {
        // Rounding on the non-binding axis must not push past the bound
        let (w, h) = fit_dimensions((997, 601), (1280, 800));
        assert!(w <= 1280 && h <= 800);
    }

    #[test]
    fn fit_extreme_aspect_keeps_one_pixel_minimum() {
        let (w, h) = fit_dimensions((10000, 1), (1280, 800));
        assert_eq!(w, 1280);
        assert_eq!(h, 1);
    }

    // =========================================================================
    // center_offset tests
    // =========================================================================

    #[test]
    fn center_offset_splits_padding_evenly() {
        assert_eq!(center_offset((1280, 640), (1280, 800)), (0, 80));
        assert_eq!(center_offset((400, 800), (1280, 800)), (440, 0));
    }

    #[test]
    fn center_offset_rounds_down_on_odd_padding() {
        assert_eq!(center_offset((100, 51), (101, 100)), (0, 24));
    }

    #[test]
    fn center_offset_zero_when_inner_fills_outer() {
        assert_eq!(center_offset((1280, 800), (1280, 800)), (0, 0));
    }

    // =========================================================================
    // crop_rect tests
    // =========================================================================

    #[test]
    fn crop_wider_source_trims_sides() {
        // 1920x1080 (1.78) to 1280x800 (1.6): keep height, crop width to 1728
        assert_eq!(crop_rect((1920, 1080), (1280, 800)), (96, 0, 1728, 1080));
    }

    #[test]
    fn crop_taller_source_trims_top_and_bottom() {
        // Square source to 16:10 target: keep width, crop height to 625
        assert_eq!(crop_rect((1000, 1000), (1280, 800)), (0, 187, 1000, 625));
    }

    #[test]
    fn crop_same_aspect_keeps_everything() {
        assert_eq!(crop_rect((640, 400), (1280, 800)), (0, 0, 640, 400));
    }

    #[test]
    fn crop_rect_stays_within_source() {
        let (x, y, w, h) = crop_rect((333, 777), (1280, 800));
        assert!(x + w <= 333);
        assert!(y + h <= 777);
    }

    #[test]
    fn crop_square_target_of_landscape_source() {
        assert_eq!(crop_rect((300, 100), (100, 100)), (100, 0, 100, 100));
    }
}
