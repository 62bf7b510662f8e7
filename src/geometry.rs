use crate::config::GeneratorConfig;
use crate::error::KlResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

pub mod ergogen;

/// One `&key_physical_attrs` entry: width, height, x, y, rotation,
/// rotation origin. All in devicetree units (1u = 100), rotation in
/// hundredths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DtsKey {
    pub w: i32,
    pub h: i32,
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub rx: i32,
    pub ry: i32,
}

/// One key in keymap-drawer's QMK-style `info.json` layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawerKey {
    pub row: u32,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ry: Option<f64>,
}

/// Both renderings of a split board: devicetree keys in keymap order and
/// keymap-drawer keys in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalLayout {
    pub dts: Vec<DtsKey>,
    pub drawer: Vec<DrawerKey>,
}

const DTSI_PREAMBLE: &str = r#"/*
* Copyright (c) 2020 The ZMK Contributors
*
* SPDX-License-Identifier: MIT
*/

#include <physical_layouts.dtsi>

/ {
    default_layout: keymap_layout_0 {
        compatible = "zmk,physical-layout";
        display-name = "Default";
        transform = <&default_transform>;
        kscan = <&kscan0>;

        keys =
"#;

// Devicetree cells cannot hold a bare negative literal.
fn dts_cell(value: i32, width: usize) -> String {
    if value < 0 {
        format!("({})", value)
    } else {
        format!("{:>width$}", value, width = width)
    }
}

pub fn render_dtsi(keys: &[DtsKey]) -> String {
    let mut out = String::from(DTSI_PREAMBLE);

    for (i, k) in keys.iter().enumerate() {
        let sep = if i == 0 { "" } else { ", " };
        let _ = write!(
            out,
            "            {}<&key_physical_attrs {:4} {:4} {:5} {:5} {} {} {}>",
            sep,
            k.w,
            k.h,
            k.x,
            k.y,
            dts_cell(k.r, 6),
            dts_cell(k.rx, 5),
            dts_cell(k.ry, 5)
        );
        if i + 1 == keys.len() {
            out.push(';');
        }
        out.push('\n');
    }

    out.push_str("    };\n};\n");
    out
}

#[derive(Serialize)]
struct DrawerDocument<'a> {
    id: &'a str,
    name: &'a str,
    layouts: BTreeMap<&'a str, DrawerLayout<'a>>,
}

#[derive(Serialize)]
struct DrawerLayout<'a> {
    name: &'a str,
    layout: &'a [DrawerKey],
}

pub fn render_drawer_json(keys: &[DrawerKey], config: &GeneratorConfig) -> KlResult<String> {
    let mut layouts = BTreeMap::new();
    layouts.insert(
        "default_layout",
        DrawerLayout {
            name: "default_layout",
            layout: keys,
        },
    );
    let doc = DrawerDocument {
        id: &config.keyboard_id,
        name: &config.keyboard_name,
        layouts,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn write_dtsi<P: AsRef<Path>>(path: P, keys: &[DtsKey]) -> KlResult<()> {
    fs::write(&path, render_dtsi(keys))?;
    info!(
        "Generated {} ({} keys)",
        path.as_ref().display(),
        keys.len()
    );
    Ok(())
}

pub fn write_drawer_json<P: AsRef<Path>>(
    path: P,
    keys: &[DrawerKey],
    config: &GeneratorConfig,
) -> KlResult<()> {
    fs::write(&path, render_drawer_json(keys, config)?)?;
    info!(
        "Generated {} ({} layout keys)",
        path.as_ref().display(),
        keys.len()
    );
    Ok(())
}
