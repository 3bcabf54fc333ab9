// SPDX-License-Identifier: GPL-3.0-only

pub mod cli;
pub mod config;
pub mod report;
