//! Alarm clock - escalating alarm alert
//!
//! This crate rings an alarm that starts quiet and gets louder, with
//! vibration pulses that begin after a minute and come faster each time,
//! then fades out when dismissed.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Volume, ramp parameters, phases, pickable times, config
//! - **Application**: The alert player and its port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio, terminal bell,
//!   desktop notifications, tokio timers, virtual clock, config file)
//! - **CLI**: Command-line interface, argument parsing, and dismissal

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
