// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod climate;
pub mod enzymes;
pub mod nutrition; // legacy panel estimate
