// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod build;
pub mod init;
pub mod schema;
pub mod taxonomy;
