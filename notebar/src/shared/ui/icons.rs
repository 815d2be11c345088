pub(crate) const CHECK_BOX: &[u8] =
    include_bytes!("../../../../assets/svg/check-box.svg");
pub(crate) const BRUSH: &[u8] =
    include_bytes!("../../../../assets/svg/brush.svg");
pub(crate) const MIC_NONE: &[u8] =
    include_bytes!("../../../../assets/svg/mic-none.svg");
pub(crate) const IMAGE: &[u8] =
    include_bytes!("../../../../assets/svg/image.svg");
pub(crate) const ADD: &[u8] = include_bytes!("../../../../assets/svg/add.svg");
pub(crate) const AVATAR_CAT: &[u8] =
    include_bytes!("../../../../assets/svg/cat.svg");

/// Look up an embedded card image by name.
pub(crate) fn image_asset(name: &str) -> Option<&'static [u8]> {
    match name {
        "cat" => Some(AVATAR_CAT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{AVATAR_CAT, image_asset};

    #[test]
    fn given_known_name_when_looking_up_image_then_asset_is_returned() {
        assert_eq!(image_asset("cat"), Some(AVATAR_CAT));
    }

    #[test]
    fn given_unknown_name_when_looking_up_image_then_none_is_returned() {
        assert_eq!(image_asset("dog"), None);
    }
}
