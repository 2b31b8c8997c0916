// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Regional reference misos (ご当地味噌)

use crate::materials::{BARLEY_KOJI_NAME, RICE_KOJI_NAME, SOYBEAN_NAME};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MisoInfo {
    pub name: &'static str,
    /// Typical maturation in months (display only)
    pub period: u32,
    pub image: &'static str,
    /// Target salt ratio (%), matched with a tolerance window
    pub salt_range: f64,
    pub proteins: &'static [&'static str],
    /// Target koji ratio (×10 scale)
    pub koji_ratio: u32,
    pub koji_require: &'static [&'static str],
}

pub static KYUSHU_AWASE: MisoInfo = MisoInfo {
    name: "九州合わせ味噌",
    period: 1,
    image: "/img/kyushu-awase.jpg",
    salt_range: 11.5,
    proteins: &[SOYBEAN_NAME],
    koji_ratio: 25,
    koji_require: &[RICE_KOJI_NAME, BARLEY_KOJI_NAME],
};

pub static KAGA: MisoInfo = MisoInfo {
    name: "加賀味噌",
    period: 6,
    image: "/img/kaga.jpg",
    salt_range: 12.3,
    proteins: &[SOYBEAN_NAME],
    koji_ratio: 10,
    koji_require: &[RICE_KOJI_NAME],
};

pub static SATSUMA_MUGI: MisoInfo = MisoInfo {
    name: "薩摩麦味噌",
    period: 2,
    image: "/img/satsuma-mugi.jpg",
    salt_range: 10.7,
    proteins: &[SOYBEAN_NAME],
    koji_ratio: 25,
    koji_require: &[BARLEY_KOJI_NAME],
};

/// Matching order; the first satisfied entry wins.
pub static LOCAL_MISOS: [&MisoInfo; 3] = [&KYUSHU_AWASE, &KAGA, &SATSUMA_MUGI];
