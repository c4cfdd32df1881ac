//! Charts.

use crate::meta::Meta;
use crate::model::enums::ChartType;
use crate::model::format::ParagraphFormat;
use crate::model::object::{dom_object, vivify, ObjectBase};
use crate::values::{DomEnum, NUnit, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A chart legend.
///
/// Meaningful by presence: adding a legend to a chart is itself the
/// signal to render one, whether or not any formatting is set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Legend {
    #[serde(skip)]
    base: ObjectBase,
    format: Option<ParagraphFormat>,
}

static LEGEND_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Legend")
        .object::<Legend, ParagraphFormat>(
            "Format",
            |l| l.format.as_ref(),
            |l| l.format.as_mut(),
            Legend::format_mut,
        )
        .build()
});

impl Legend {
    /// Create an empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// The legend text formatting, if set.
    pub fn format(&self) -> Option<&ParagraphFormat> {
        self.format.as_ref()
    }

    /// The legend text formatting, created on first access.
    pub fn format_mut(&mut self) -> &mut ParagraphFormat {
        vivify(&mut self.format, "Format")
    }
}

dom_object!(Legend, meta = LEGEND_META, meaningful);

/// A chart placeholder in the block flow.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    #[serde(skip)]
    base: ObjectBase,
    pub chart_type: ChartType,
    pub width: NUnit,
    pub height: NUnit,
    legend: Option<Legend>,
}

static CHART_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Chart")
        .plain::<Chart>(
            "Type",
            |c| Value::Int(c.chart_type.raw()),
            |c, v| match v {
                Value::Int(raw) => {
                    c.chart_type = ChartType::from_raw(raw).ok_or_else(|| {
                        crate::error::Error::InvalidEnumValue {
                            enum_name: ChartType::NAME,
                            value: raw.to_string(),
                        }
                    })?;
                    Ok(())
                }
                Value::String(name) => {
                    c.chart_type = ChartType::from_name(&name).ok_or({
                        crate::error::Error::InvalidEnumValue {
                            enum_name: ChartType::NAME,
                            value: name,
                        }
                    })?;
                    Ok(())
                }
                other => Err(other.incompatible_with(ChartType::NAME)),
            },
            |c| c.chart_type = ChartType::default(),
        )
        .scalar::<Chart, NUnit>("Width", |c| &c.width, |c| &mut c.width)
        .scalar::<Chart, NUnit>("Height", |c| &c.height, |c| &mut c.height)
        .object::<Chart, Legend>(
            "Legend",
            |c| c.legend.as_ref(),
            |c| c.legend.as_mut(),
            Chart::legend_mut,
        )
        .build()
});

impl Chart {
    /// Create a chart of the given type.
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            base: ObjectBase::default(),
            chart_type,
            width: NUnit::default(),
            height: NUnit::default(),
            legend: None,
        }
    }

    /// The legend, if added.
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// The legend, added on first access.
    pub fn legend_mut(&mut self) -> &mut Legend {
        vivify(&mut self.legend, "Legend")
    }
}

impl Default for Chart {
    fn default() -> Self {
        Chart::new(ChartType::default())
    }
}

dom_object!(Chart, meta = CHART_META);
