//! Tables.

use crate::meta::Meta;
use crate::model::borders::{Borders, Shading};
use crate::model::collections::ObjectCollection;
use crate::model::object::{dom_object, vivify, ObjectBase};
use crate::model::paragraph::Paragraph;
use crate::model::section::{add_paragraph, Elements};
use crate::values::{NUnit, Unit};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A table column.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Column {
    #[serde(skip)]
    base: ObjectBase,
    pub width: NUnit,
}

static COLUMN_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Column")
        .scalar::<Column, NUnit>("Width", |c| &c.width, |c| &mut c.width)
        .build()
});

impl Column {
    /// Create a column with no explicit width.
    pub fn new() -> Self {
        Self::default()
    }
}

dom_object!(Column, meta = COLUMN_META);

/// A table cell.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cell {
    #[serde(skip)]
    base: ObjectBase,
    shading: Option<Shading>,
    pub elements: Elements,
}

static CELL_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Cell")
        .object::<Cell, Shading>(
            "Shading",
            |c| c.shading.as_ref(),
            |c| c.shading.as_mut(),
            Cell::shading_mut,
        )
        .collection::<Cell, Elements>("Elements", "Element", |c| &c.elements, |c| {
            &mut c.elements
        })
        .build()
});

impl Cell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// The background shading, if set.
    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    /// The background shading, created on first access.
    pub fn shading_mut(&mut self) -> &mut Shading {
        vivify(&mut self.shading, "Shading")
    }

    /// Append an empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        add_paragraph(&mut self.elements)
    }
}

dom_object!(Cell, meta = CELL_META);

/// A table row.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Row {
    #[serde(skip)]
    base: ObjectBase,
    pub height: NUnit,
    pub cells: ObjectCollection<Cell>,
}

static ROW_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Row")
        .scalar::<Row, NUnit>("Height", |r| &r.height, |r| &mut r.height)
        .collection::<Row, ObjectCollection<Cell>>("Cells", "Cell", |r| &r.cells, |r| {
            &mut r.cells
        })
        .build()
});

impl Row {
    /// Create a row with `cells` empty cells.
    pub fn new(cells: usize) -> Self {
        let mut row = Self::default();
        for _ in 0..cells {
            row.cells.push(Cell::new());
        }
        row
    }
}

dom_object!(Row, meta = ROW_META);

/// A table: columns first, then rows of cells.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    #[serde(skip)]
    base: ObjectBase,
    borders: Option<Borders>,
    pub columns: ObjectCollection<Column>,
    pub rows: ObjectCollection<Row>,
}

static TABLE_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Table")
        .object::<Table, Borders>(
            "Borders",
            |t| t.borders.as_ref(),
            |t| t.borders.as_mut(),
            Table::borders_mut,
        )
        .collection::<Table, ObjectCollection<Column>>(
            "Columns",
            "Column",
            |t| &t.columns,
            |t| &mut t.columns,
        )
        .collection::<Table, ObjectCollection<Row>>("Rows", "Row", |t| &t.rows, |t| &mut t.rows)
        .build()
});

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table borders, if set.
    pub fn borders(&self) -> Option<&Borders> {
        self.borders.as_ref()
    }

    /// The table borders, created on first access.
    pub fn borders_mut(&mut self) -> &mut Borders {
        vivify(&mut self.borders, "Borders")
    }

    /// Append a column of the given width.
    pub fn add_column(&mut self, width: Unit) -> &mut Column {
        let column = self.columns.push(Column::new());
        column.width.set(width);
        column
    }

    /// Append a row with one cell per declared column.
    pub fn add_row(&mut self) -> &mut Row {
        let cells = self.columns.len();
        self.rows.push(Row::new(cells))
    }
}

dom_object!(Table, meta = TABLE_META);
