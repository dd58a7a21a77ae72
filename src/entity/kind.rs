use bitflags::bitflags;
use strum_macros::{AsRefStr, EnumIter};

/// The kinds of entity that traverse the maze graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Mouse,
    Cat1,
    Cat2,
    Cat3,
    Cat4,
}

impl EntityKind {
    /// The four cats, in group order.
    pub const CATS: [EntityKind; 4] = [EntityKind::Cat1, EntityKind::Cat2, EntityKind::Cat3, EntityKind::Cat4];

    /// Returns the access flag that represents this kind in a node's access set.
    pub const fn access(self) -> Access {
        match self {
            EntityKind::Mouse => Access::MOUSE,
            EntityKind::Cat1 => Access::CAT1,
            EntityKind::Cat2 => Access::CAT2,
            EntityKind::Cat3 => Access::CAT3,
            EntityKind::Cat4 => Access::CAT4,
        }
    }

    pub const fn is_cat(self) -> bool {
        !matches!(self, EntityKind::Mouse)
    }
}

bitflags! {
    /// The set of entity kinds allowed to leave a node in one direction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        const MOUSE = 1 << 0;
        const CAT1 = 1 << 1;
        const CAT2 = 1 << 2;
        const CAT3 = 1 << 3;
        const CAT4 = 1 << 4;
        const CATS = Self::CAT1.bits() | Self::CAT2.bits() | Self::CAT3.bits() | Self::CAT4.bits();
    }
}

impl Default for Access {
    /// Fresh nodes allow every kind in every direction.
    fn default() -> Self {
        Access::all()
    }
}

impl Access {
    pub fn permits(self, kind: EntityKind) -> bool {
        self.contains(kind.access())
    }
}
