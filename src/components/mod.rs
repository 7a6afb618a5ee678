//! Render units for pages that the site itself ships.
//!
//! Each unit is a pure function of its inputs: data in, [`maud::Markup`] out.
//! The ambient color mode comes in through a [`ThemeReader`](crate::ambient::ThemeReader),
//! so tests can pin it with `ThemeReader::fixed` instead of mounting a page.

pub mod features;
pub mod home;
pub mod themed_image;
