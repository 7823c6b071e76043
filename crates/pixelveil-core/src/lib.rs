//! # Pixelveil Core API
//!
//! Hides a text message inside a raster image by substituting the least
//! significant bit of every color sample, and recovers it losslessly later.
//! The message is masked with a password-derived XOR keystream before it is
//! embedded, framed by a 32-bit big-endian length prefix and a NUL
//! terminator.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::RgbImage;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! RgbImage::from_pixel(64, 64, image::Rgb([120, 60, 30]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! pixelveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")     // will hide this message inside the image
//!     .with_password("SuperSecret42")    // will mask the message with this password
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust
//! # use image::RgbImage;
//! # use tempfile::tempdir;
//! # let temp_dir = tempdir().expect("Failed to create temporary directory");
//! # let carrier = temp_dir.path().join("carrier.png");
//! # RgbImage::from_pixel(64, 64, image::Rgb([120, 60, 30]))
//! #     .save(&carrier)
//! #     .expect("Failed to write carrier image");
//! # pixelveil_core::api::hide::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_password("SuperSecret42")
//! #     .with_image(&carrier)
//! #     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//! #     .execute()
//! #     .expect("Failed to hide message in image");
//! let message = pixelveil_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-secret.png"))
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

pub mod api;
pub mod commands;
pub mod crypto;
pub mod error;
pub mod lsb_codec;
pub mod media;
pub mod message;
pub mod result;

pub use crate::error::PixelveilError;
pub use crate::lsb_codec::LsbCodec;
pub use crate::media::{Media, Persist, MAX_CARRIER_FILE_SIZE};
pub use crate::message::Message;
pub use crate::result::Result;
