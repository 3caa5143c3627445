use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $width:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:0width$}", $prefix, self.0, width = $width)
            }
        }
    };
}

entity_id!(
    /// Customer identifier, rendered as `C0001`.
    CustomerId, "C", 4
);
entity_id!(
    /// Product identifier, rendered as `P0001`.
    ProductId, "P", 4
);
entity_id!(
    /// Store identifier, rendered as `S001`.
    StoreId, "S", 3
);
entity_id!(
    /// Transaction identifier, rendered as `T0000001`.
    TransactionId, "T", 7
);

/// Dense 1-based counter owned by a single generator stage.
///
/// Identifiers are handed out in strictly increasing order with no gaps.
#[derive(Debug, Clone)]
pub struct Sequence {
    next: u32,
}

impl Sequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id<I: From<u32>>(&mut self) -> I {
        let value = self.next;
        self.next += 1;
        I::from(value)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_render_with_prefix_and_padding() {
        assert_eq!(CustomerId::new(7).to_string(), "C0007");
        assert_eq!(ProductId::new(123).to_string(), "P0123");
        assert_eq!(StoreId::new(10).to_string(), "S010");
        assert_eq!(TransactionId::new(500_000).to_string(), "T0500000");
    }

    #[test]
    fn sequence_is_dense_and_increasing() {
        let mut seq = Sequence::new();
        let a: ProductId = seq.next_id();
        let b: ProductId = seq.next_id();
        let c: ProductId = seq.next_id();
        assert_eq!((a.value(), b.value(), c.value()), (1, 2, 3));
        let d: CustomerId = Sequence::new().next_id();
        assert_eq!(d.value(), 1);
    }
}
