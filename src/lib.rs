//! # audio-file-sink
//!
//! **Note:** This crate is under active development. The API may change before 1.0.
//!
//! Write blocks of decoded audio to a file without caring which encoder does it.
//!
//! A [`Sink`] tries each compiled-in encoder backend in priority order and keeps
//! the first one that opens the destination. Samplerate and channel count can
//! be given up front or preset later; the file is opened once both are known.
//! Writes are clamped to what the backend and the supplied block can safely
//! handle and never fail the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use audio_file_sink::{MultiBlock, Sink};
//!
//! let mut sink = Sink::builder("out.wav")
//!     .samplerate(48000)
//!     .channels(2)
//!     .on_event(|e| tracing::warn!(?e, "sink event"))
//!     .build()?;
//!
//! let block = MultiBlock::new(2, 1024);
//! sink.write_multi(&block, 1024);
//! sink.close()?;
//! # Ok::<(), audio_file_sink::SinkError>(())
//! ```
//!
//! ## Backends
//!
//! - `hound`: WAV through the `hound` crate (feature `hound-backend`, default)
//! - `wavwrite`: native 16-bit PCM WAV, always compiled
//!
//! Custom encoders implement [`BackendFactory`] and [`Backend`] and are passed
//! with [`SinkBuilder::backends`].
//!
//! ## Threading
//!
//! A sink has no internal locking. Every mutating call takes `&mut self`, so
//! concurrent producers have to serialize through one owner.

#![warn(missing_docs)]
// Audio code requires intentional numeric casts between sample formats
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]
// unwrap/expect allowed in tests only
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

pub mod backend;
mod builder;
mod chunk;
mod config;
mod error;
mod event;
pub mod format;
mod sink;
pub mod validate;

pub use backend::{compiled_backends, Backend, BackendFactory, BackendList};
pub use builder::SinkBuilder;
pub use chunk::{MultiBlock, Sample};
pub use config::{
    FormatPreset, DEFAULT_CHANNELS, DEFAULT_MAX_BLOCK_SIZE, MAX_CHANNELS, MAX_SAMPLERATE,
};
pub use error::SinkError;
pub use event::{event_callback, EventCallback, SinkEvent, WriteLimit};
pub use sink::{Sink, SinkState};
pub use validate::{clamp_write_channels, clamp_write_length, validate_channels, validate_samplerate};
