// Copyright (c) 2025 Fundtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod advisor;
pub mod categories;
pub mod diesel;
pub mod exporter;
pub mod importer;
pub mod reports;
pub mod transactions;
