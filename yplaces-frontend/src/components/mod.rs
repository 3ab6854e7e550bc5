mod banners;
mod map;
mod modal;
mod photo_modal;
mod place;
mod review_modal;
mod reviews;
mod star_rating;

pub use self::{
    banners::*, map::*, modal::*, photo_modal::*, place::*, review_modal::*, reviews::*,
    star_rating::*,
};
