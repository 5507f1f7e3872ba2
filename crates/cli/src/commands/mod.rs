// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod daemon;
pub mod once;
pub mod report;
pub mod scan;
pub mod send;
pub mod status;
