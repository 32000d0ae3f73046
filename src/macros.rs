macro_rules! id {
    ($name:ident) => {
        #[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
        pub struct $name(u32);

        impl $name {
            #[allow(dead_code)]
            pub fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            #[allow(dead_code)]
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<crate::wire::ObjectId> for $name {
            fn from(f: crate::wire::ObjectId) -> Self {
                Self(f.raw())
            }
        }

        impl From<$name> for crate::wire::ObjectId {
            fn from(f: $name) -> Self {
                crate::wire::ObjectId::from_raw(f.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
