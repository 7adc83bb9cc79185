/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod errors;
mod oauth;
pub mod order;
mod parsers;
pub mod properties;
pub mod search_order;
mod session;
pub mod tweet;
pub mod user_order;

pub use api::*;
pub use client::*;
pub use errors::*;
pub use oauth::Creds;
pub use order::*;
pub use properties::*;
pub use search_order::*;
pub use session::Statistics;
pub use tweet::*;
pub use user_order::*;
