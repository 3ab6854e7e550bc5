/// User facing texts.
///
/// The key of a message is its English text which is also the
/// lookup key of the page's translation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    ProvideRatingAndComment,
    UnableToAddReview,
    ThankYouForReview,
    PictureUploaded,
    UnableToUploadPicture,
    SelectPicture,
}

impl Msg {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProvideRatingAndComment => "Please provide a rating and a comment",
            Self::UnableToAddReview => "Unable to add review",
            Self::ThankYouForReview => "Thank you for your review",
            Self::PictureUploaded => "Picture uploaded",
            Self::UnableToUploadPicture => "Unable to upload picture",
            Self::SelectPicture => "Please select a picture",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerLevel {
    Warning,
    Danger,
}

impl BannerLevel {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "alert alert-warning",
            Self::Danger => "alert alert-danger",
        }
    }
}

/// Dismissible message shown inside a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Banner {
    pub level: BannerLevel,
    pub msg: Msg,
}

impl Banner {
    #[must_use]
    pub const fn warning(msg: Msg) -> Self {
        Self {
            level: BannerLevel::Warning,
            msg,
        }
    }

    #[must_use]
    pub const fn danger(msg: Msg) -> Self {
        Self {
            level: BannerLevel::Danger,
            msg,
        }
    }
}
