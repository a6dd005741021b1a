//! Greedy single-day itinerary sequencer for Compass.
//!
//! This crate provides [`GreedySequencer`], the default implementation of the
//! [`Sequencer`](compass_core::Sequencer) trait. It orders the visitor's
//! selected places with a short chain of heuristics (weather sensitivity when
//! raining, crowd level when avoiding crowds, interest overlap, rating), then
//! walks the ordered list with a running clock to produce arrival and
//! departure times, waiting for opening, truncating at closing, and inserting
//! at most one lunch and one coffee break.
//!
//! The sequencer is a pure function of its inputs. A secondary entry point,
//! [`GreedySequencer::alternatives`], derives reordered variants of a plan
//! from the same building blocks.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alternatives;
mod ordering;
mod sequencer;
mod timeline;

pub use alternatives::{Alternative, AlternativeFocus, PlanSet};
pub use sequencer::{BreakPolicy, GreedySequencer, SequencerConfig};
