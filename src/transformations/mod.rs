//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Transformations Module
//!
//! The built-in directive transformations.
//!
//! | Keyword | Directive | Effect |
//! |---|---|---|
//! | `rename` | `rename old new` | renames a field and its column |
//! | `to-string` | `to-string col` | stringifies a value, declares the field `string` |
//! | `mask` | `mask col from to` | masks a character range (range revision) |
//! | `mask` | `mask col left\|right c n` | masks all but `n` characters (substitution revision) |
//!
//! Each transformation is built with its `initialize` constructor and applied
//! through the [`crate::transformation::ZiTransformation`] trait.

pub mod mask;
pub mod rename;
pub mod to_string;

pub use mask::{ZiMaskDirection, ZiMaskRange, ZiMaskSubstitution};
pub use rename::ZiRename;
pub use to_string::ZiToString;
