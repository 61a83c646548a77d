//! Text forms accepted on the command line.
//!
//! - Points: `x,y`, `x=..,y=..` or complex text such as `3-4j`.
//! - Rectangles: `x,y,w,h` or `x=..,y=..,w=..,h=..`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use twod::{Point, Rect, Value};

pub fn point(text: &str) -> Result<Point> {
    let text = text.trim();
    let parsed = if text.contains('=') {
        Point::from_any_strict(&Value::Map(keyed(text)?))
    } else {
        text.parse::<Point>()
    };
    parsed.with_context(|| format!("parsing point {text:?}"))
}

pub fn rect(text: &str) -> Result<Rect> {
    let text = text.trim();
    let value = if text.contains('=') {
        Value::Map(keyed(text)?)
    } else {
        Value::Seq(numbers(text)?)
    };
    Rect::from_any(&value).with_context(|| format!("parsing rect {text:?}"))
}

fn keyed(text: &str) -> Result<BTreeMap<String, f64>> {
    text.split(',')
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("expected key=value, got {pair:?}"))?;
            let value: f64 = value
                .trim()
                .parse()
                .with_context(|| format!("invalid number for {:?}", key.trim()))?;
            Ok((key.trim().to_string(), value))
        })
        .collect()
}

fn numbers(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|n| {
            n.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number {n:?}"))
        })
        .collect()
}
