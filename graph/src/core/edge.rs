use serde::Serialize;

/// An edge connecting a child commit to one of its parents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Source commit ID (child)
    pub from: String,
    /// Target commit ID (parent)
    pub to: String,
    pub from_lane: usize,
    pub to_lane: usize,
    /// Edge leaves a merge commit
    pub is_merge: bool,
    pub shape: EdgeShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeShape {
    /// Both ends sit in the same lane
    Straight,
    /// The edge crosses lanes
    Curved,
}

impl Edge {
    pub fn new(from: String, to: String, from_lane: usize, to_lane: usize) -> Self {
        Self {
            from,
            to,
            from_lane,
            to_lane,
            is_merge: false,
            shape: EdgeShape::between(from_lane, to_lane),
        }
    }

    pub fn merge(from: String, to: String, from_lane: usize, to_lane: usize) -> Self {
        Self {
            is_merge: true,
            ..Self::new(from, to, from_lane, to_lane)
        }
    }

    pub fn is_curved(&self) -> bool {
        self.shape == EdgeShape::Curved
    }
}

impl EdgeShape {
    pub fn between(from_lane: usize, to_lane: usize) -> Self {
        if from_lane == to_lane {
            EdgeShape::Straight
        } else {
            EdgeShape::Curved
        }
    }
}
