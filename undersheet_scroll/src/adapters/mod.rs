// Copyright 2026 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional adapters for specific sheet state holders.

#[cfg(feature = "session_adapter")]
pub mod session;
