// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property test modules

mod aggregation;
