//! Tab stops.

use crate::meta::Meta;
use crate::model::enums::{TabAlignment, TabLeader};
use crate::model::object::{dom_object, DocumentObject, ObjectBase, ParentLink};
use crate::values::{NEnum, Unit, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A single tab stop.
///
/// The position is a plain field: a tab stop without a position is not a
/// thing, so it is always set and never participates in null bookkeeping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TabStop {
    #[serde(skip)]
    base: ObjectBase,
    pub position: Unit,
    pub alignment: NEnum<TabAlignment>,
    pub leader: NEnum<TabLeader>,
}

static TAB_STOP_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("TabStop")
        .plain::<TabStop>(
            "Position",
            |t| Value::Unit(t.position),
            |t, v| match v {
                Value::Unit(u) => {
                    t.position = u;
                    Ok(())
                }
                Value::Double(d) => {
                    t.position = Unit::from_point(d);
                    Ok(())
                }
                Value::Int(i) => {
                    t.position = Unit::from_point(f64::from(i));
                    Ok(())
                }
                other => Err(other.incompatible_with("Unit")),
            },
            |t| t.position = Unit::ZERO,
        )
        .scalar::<TabStop, NEnum<TabAlignment>>("Alignment", |t| &t.alignment, |t| &mut t.alignment)
        .scalar::<TabStop, NEnum<TabLeader>>("Leader", |t| &t.leader, |t| &mut t.leader)
        .build()
});

impl TabStop {
    /// Create a tab stop at `position`.
    pub fn new(position: Unit) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

dom_object!(TabStop, meta = TAB_STOP_META);

static TAB_STOPS_META: Lazy<Meta> = Lazy::new(|| Meta::empty("TabStops"));

/// The tab stops of a paragraph, ordered by position.
///
/// Adding a stop at an existing position replaces that stop. The
/// `cleared` flag records that inherited tab stops were explicitly
/// discarded, which serializes as a clearing marker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TabStops {
    #[serde(skip)]
    base: ObjectBase,
    stops: Vec<TabStop>,
    cleared: bool,
}

impl TabStops {
    /// Create an empty tab stop list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether no stops are present.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, TabStop> {
        self.stops.iter()
    }

    /// Add a stop, keeping the list ordered by position. A stop at the
    /// same effective position replaces the existing one.
    pub fn add_tab_stop(&mut self, mut stop: TabStop) -> &mut TabStop {
        let point = stop.position.as_point();
        let slot = self
            .stops
            .iter()
            .position(|existing| existing.position.as_point() >= point);
        let index = match slot {
            Some(i) if self.stops[i].position.as_point() == point => {
                stop.set_parent(Some(ParentLink::Index(i)));
                self.stops[i] = stop;
                return &mut self.stops[i];
            }
            Some(i) => {
                stop.set_parent(Some(ParentLink::Index(i)));
                self.stops.insert(i, stop);
                i
            }
            None => {
                let i = self.stops.len();
                stop.set_parent(Some(ParentLink::Index(i)));
                self.stops.push(stop);
                i
            }
        };
        self.rebind_from(index + 1);
        &mut self.stops[index]
    }

    /// Remove the stop at the given effective position, if present.
    pub fn remove_tab_stop(&mut self, position: Unit) -> Option<TabStop> {
        let point = position.as_point();
        let index = self
            .stops
            .iter()
            .position(|stop| stop.position.as_point() == point)?;
        let mut removed = self.stops.remove(index);
        removed.set_parent(None);
        self.rebind_from(index);
        Some(removed)
    }

    /// Discard all stops and mark the inherited ones as cleared.
    pub fn clear_all(&mut self) {
        for stop in &mut self.stops {
            stop.set_parent(None);
        }
        self.stops.clear();
        self.cleared = true;
    }

    /// Whether inherited stops were explicitly cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    fn rebind_from(&mut self, start: usize) {
        for (i, stop) in self.stops.iter_mut().enumerate().skip(start) {
            stop.set_parent(Some(ParentLink::Index(i)));
        }
    }
}

impl DocumentObject for TabStops {
    fn meta(&self) -> &'static Meta {
        &TAB_STOPS_META
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn clone_object(&self) -> Box<dyn DocumentObject> {
        Box::new(self.clone())
    }

    fn is_meaningful(&self) -> bool {
        self.cleared
    }

    fn is_collection(&self) -> bool {
        true
    }

    fn child_count(&self) -> usize {
        self.stops.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn DocumentObject> {
        self.stops.get(index).map(|s| s as &dyn DocumentObject)
    }

    fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn DocumentObject> {
        self.stops.get_mut(index).map(|s| s as &mut dyn DocumentObject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::object_is_null;

    #[test]
    fn test_stops_stay_ordered() {
        let mut stops = TabStops::new();
        stops.add_tab_stop(TabStop::new(Unit::from_centimeter(4.0)));
        stops.add_tab_stop(TabStop::new(Unit::from_centimeter(1.0)));
        stops.add_tab_stop(TabStop::new(Unit::from_centimeter(2.5)));

        let positions: Vec<f64> = stops.iter().map(|s| s.position.value()).collect();
        assert_eq!(positions, [1.0, 2.5, 4.0]);
        for (i, stop) in stops.iter().enumerate() {
            assert_eq!(stop.parent_link(), Some(ParentLink::Index(i)));
        }
    }

    #[test]
    fn test_same_position_replaces() {
        let mut stops = TabStops::new();
        stops.add_tab_stop(TabStop::new(Unit::from_point(36.0)));

        let mut replacement = TabStop::new(Unit::from_point(36.0));
        replacement.alignment.set(TabAlignment::Right);
        stops.add_tab_stop(replacement);

        assert_eq!(stops.len(), 1);
        assert_eq!(
            stops.iter().next().unwrap().alignment.get(),
            TabAlignment::Right
        );
    }

    #[test]
    fn test_clear_all_is_meaningful() {
        let mut stops = TabStops::new();
        assert!(object_is_null(&stops).unwrap());

        stops.add_tab_stop(TabStop::new(Unit::from_point(12.0)));
        stops.clear_all();
        assert!(stops.is_empty());
        assert!(stops.is_cleared());
        // Cleared stops still serialize, so they are not semantically empty.
        assert!(!object_is_null(&stops).unwrap());
    }

    #[test]
    fn test_remove_tab_stop() {
        let mut stops = TabStops::new();
        stops.add_tab_stop(TabStop::new(Unit::from_point(10.0)));
        stops.add_tab_stop(TabStop::new(Unit::from_point(20.0)));

        let removed = stops.remove_tab_stop(Unit::from_point(10.0)).unwrap();
        assert_eq!(removed.parent_link(), None);
        assert_eq!(stops.len(), 1);
        assert_eq!(
            stops.iter().next().unwrap().parent_link(),
            Some(ParentLink::Index(0))
        );
        assert!(stops.remove_tab_stop(Unit::from_point(99.0)).is_none());
    }
}
