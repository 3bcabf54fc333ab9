// SPDX-License-Identifier: GPL-3.0-only

fn main() {
    env_logger::init();
    eox_query::cli::run();
}
