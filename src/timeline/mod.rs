// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Timeline generation pipeline
//!
//! Turns an article's plain-text extract into a validated, nested
//! timeline structure via a mandatory structured language-model call,
//! with the document cache consulted first. Also provides on-demand
//! expansion of a single event into a short supplementary paragraph.

pub mod expander;
pub mod service;
pub mod synthesizer;
pub mod types;

pub use expander::{DetailExpander, NO_EXTRA_INFO};
pub use service::TimelineService;
pub use synthesizer::TimelineSynthesizer;
pub use types::{Event, EventImage, Period, Timeline, TimelineError};
