/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

mod config;
mod replay;

use crate::config::Config;
use crate::replay::{ConfiguredSession, Report};
use clap::Parser;
use std::error::Error;
use tracing::info;

#[derive(Parser)]
#[command()]
struct AppShellArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Paths to navigate, in order. Defaults to `/`.
    #[arg(value_name = "PATH")]
    paths: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started configurable-app-shell");

    let args = AppShellArgs::parse();
    let config = Config::load(&args.config)?;
    let shell = config.build_shell()?;

    let paths = if args.paths.is_empty() {
        vec!["/".to_string()]
    } else {
        args.paths
    };

    let session = ConfiguredSession::from(&config.session);
    let navigations = replay::navigate_all(&shell, &session, &paths).await;
    let calls = replay::run_calls(&shell, &config.calls).await;

    let report = Report {
        shell: shell.name().to_string(),
        navigations,
        calls,
        activity: shell.activity().snapshot().into(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
