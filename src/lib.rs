//! Parliament - Multi-lens decision synthesis
//!
//! Two independent halves that share only vocabulary (uncertainty vs. resolution):
//!
//! - **Deliberation**: a decision prompt runs through six consensus lenses and
//!   an adversarial challenge lens. The challenge tier alone decides the
//!   recommended action.
//! - **POG scoring**: recorded evaluation cycles are scored for how often
//!   acknowledged uncertainty survived, and two conditions are compared.
//!
//! Everything here is synchronous and deterministic. The only I/O is
//! explicit cycle export/import and config loading.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use parliament::{Parliament, Profile};
//! use parliament::pog::{self, CycleLog, TestCycle};
//!
//! // Deliberate
//! let report = Parliament::new(Profile::Analytical).deliberate("Should we migrate to GraphQL?");
//! println!("{}", report.render_text());
//!
//! // Score
//! let mut baseline = CycleLog::new();
//! baseline.add_cycle(TestCycle::new("Pivot?", "withheld", "GUIDANCE_WITHHELD"));
//! let mut treatment = CycleLog::new();
//! treatment.add_cycle(TestCycle::new("Pivot?", "do it", "FORCED_SYNTHESIS"));
//! let delta = pog::delta(baseline.cycles(), treatment.cycles());
//! ```
//!
//! # Architecture
//!
//! ```text
//! prompt + profile
//!        │
//!        ▼
//! ┌──────────────┐    ┌──────────────────┐
//! │ Profile table│───▶│ 6 consensus lenses│──┐
//! └──────────────┘    └──────────────────┘  │
//!        │            ┌──────────────────┐  ▼
//!        └───────────▶│ challenge lens    │──▶ composer ──▶ DeliberationReport
//!                     └──────────────────┘
//!
//! CycleLog (baseline) ─┐
//!                      ├──▶ scorer + temptation tracker ──▶ PogReport
//! CycleLog (treatment) ┘
//! ```

pub mod challenge;
pub mod config;
pub mod error;
pub mod lenses;
pub mod pog;
pub mod profiles;
pub mod synthesis;
pub mod types;

// Core types
pub use error::{Error, Result};
pub use profiles::{Profile, WeightVector};
pub use synthesis::{compose, Parliament};
pub use types::*;

// Configuration
pub use config::Config;
