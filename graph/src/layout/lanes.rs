use std::collections::HashMap;

use super::palette::Palette;

/// Lane and color given to a branch label on first sighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneAssignment {
    pub lane: usize,
    pub color: String,
}

/// Keyed mapping from branch label to lane/color.
///
/// Lanes and colors come from two separate counters. They advance together
/// today, but colors wrap around the palette while lanes keep growing.
pub struct LaneAllocator<'p> {
    palette: &'p Palette,
    assignments: HashMap<String, LaneAssignment>,
    /// Labels in first-seen order
    order: Vec<String>,
    next_lane: usize,
    next_color: usize,
}

impl<'p> LaneAllocator<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            assignments: HashMap::new(),
            order: Vec::new(),
            next_lane: 0,
            next_color: 0,
        }
    }

    /// Assignment for a label, allocating lane and color the first time
    pub fn assign(&mut self, label: &str) -> &LaneAssignment {
        if !self.assignments.contains_key(label) {
            let assignment = LaneAssignment {
                lane: self.next_lane,
                color: self.palette.color(self.next_color).to_string(),
            };
            self.next_lane += 1;
            self.next_color += 1;
            self.order.push(label.to_string());
            self.assignments.insert(label.to_string(), assignment);
        }
        &self.assignments[label]
    }

    pub fn get(&self, label: &str) -> Option<&LaneAssignment> {
        self.assignments.get(label)
    }

    /// Labels with their assignments, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LaneAssignment)> {
        self.order
            .iter()
            .map(|label| (label.as_str(), &self.assignments[label]))
    }

    pub fn lane_count(&self) -> usize {
        self.next_lane
    }
}
