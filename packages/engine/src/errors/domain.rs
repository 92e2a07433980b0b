//! Domain-level error type used across the engine and its adapters.
//!
//! This error type is UI- and transport-agnostic. The one variant that is
//! fatal to a running round is `ExhaustedDeck`; everything else is either a
//! caller mistake or an adapter failure that the round never observes.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Io,
    MalformedRecord,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The sampler cannot satisfy the exclusion constraint: every card in
    /// the deck is already played or queued. Fatal to the round.
    ExhaustedDeck,
    /// Input/user validation or business rule violation
    Validation(String),
    /// Infrastructure/operational failures (deck file, score store)
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::ExhaustedDeck => write!(f, "deck exhausted: no unused cards remain"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
