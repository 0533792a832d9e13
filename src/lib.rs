//! Vectorized geodesic operations over n-dimensional arrays.
//!
//! This crate binds the geodesic solver of [`geographiclib_rs`] to
//! [`ndarray`], exposing batch variants of the direct problem, the inverse
//! problem, and distance-only computation. Every input to an operation is
//! independently a scalar or an array; scalars broadcast against the largest
//! input, and all outputs of a call share that input's shape.
//!
//! The underlying solver uses the geodesic algorithms given by
//! [Karney (2013)], which are accurate to a few nanometers and always
//! converge, including for near-antipodal points.
//!
//! # Examples
//!
//! ```
//! use geod_array::Geod;
//!
//! let g = Geod::wgs84();
//!
//! // Distances from the origin to two points, in meters.
//! let dist = g.distance(0.0, 0.0, vec![0.0, 10.0], vec![1.0, 10.0]).unwrap();
//! assert_eq!(dist.shape(), &[2]);
//! assert!((dist[[0]] - 111_319.49).abs() < 0.01);
//! ```
//!
//! [Karney (2013)]: https://arxiv.org/pdf/1109.4448.pdf

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geod::Geod;

pub mod algorithm;
pub mod error;
mod geod;

pub use algorithm::broadcasting::BroadcastableFloat;
