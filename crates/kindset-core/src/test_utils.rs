//! Test fixtures for kindset-core's unit tests.
//!
//! The derive macro targets the `kindset` facade, so closed sets here are
//! implemented by hand through `fixture_set!`.

use std::any::Any;

use crate::capability::{Named, Query};
use crate::kind::{KindDescriptor, KindId};
use crate::tagged::{ClosedSet, Variant, Visit};

/// Round solid. Curved.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

/// Flat-faced solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub edge: f64,
}

impl Cube {
    pub fn new(edge: f64) -> Self {
        Self { edge }
    }
}

/// Curved solid with an apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
}

impl Cone {
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }
}

impl Query for Sphere {
    fn query(&self) -> bool {
        true
    }
}

impl Query for Cube {
    fn query(&self) -> bool {
        false
    }
}

impl Query for Cone {
    fn query(&self) -> bool {
        true
    }
}

impl Named for Sphere {
    fn kind_name(&self) -> &'static str {
        "Sphere"
    }
}

impl Named for Cube {
    fn kind_name(&self) -> &'static str {
        "Cube"
    }
}

impl Named for Cone {
    fn kind_name(&self) -> &'static str {
        "Cone"
    }
}

macro_rules! fixture_set {
    ($set:ident { $($variant:ident = $index:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum $set {
            $($variant($variant)),+
        }

        impl ClosedSet for $set {
            const NAME: &'static str = stringify!($set);
            const KINDS: &'static [KindDescriptor] =
                &[$(KindDescriptor::new(stringify!($variant), $index)),+];

            fn kind(&self) -> KindId {
                match self {
                    $($set::$variant(_) => KindId::new($index)),+
                }
            }

            fn try_wrap<T: Any>(value: T) -> Option<Self> {
                let mut slot = Some(value);
                let any: &mut dyn Any = &mut slot;
                if let Some(inner) = any.downcast_mut::<Option<Self>>() {
                    return inner.take();
                }
                $(
                    if let Some(inner) = any.downcast_mut::<Option<$variant>>() {
                        return inner.take().map($set::$variant);
                    }
                )+
                None
            }
        }

        $(
            impl Variant<$set> for $variant {
                const KIND: KindId = KindId::new($index);

                fn wrap(self) -> $set {
                    $set::$variant(self)
                }

                #[allow(unreachable_patterns)]
                fn project(value: &$set) -> Option<&Self> {
                    match value {
                        $set::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for $set {
                fn from(payload: $variant) -> Self {
                    $set::$variant(payload)
                }
            }
        )+

        impl Query for $set {
            fn query(&self) -> bool {
                match self {
                    $($set::$variant(payload) => payload.query()),+
                }
            }
        }

        impl Named for $set {
            fn kind_name(&self) -> &'static str {
                match self {
                    $($set::$variant(_) => stringify!($variant)),+
                }
            }
        }

        impl $set {
            pub fn accept<V, R>(&self, visitor: &mut V) -> R
            where
                V: $(Visit<$variant, Output = R> +)+ ?Sized,
            {
                match self {
                    $($set::$variant(payload) => <V as Visit<$variant>>::visit(visitor, payload)),+
                }
            }
        }
    };
}

fixture_set!(Shape { Sphere = 0, Cube = 1 });
fixture_set!(Solid { Sphere = 0, Cube = 1, Cone = 2 });

/// A payload that claims a discriminant `Shape` never declares.
#[derive(Debug)]
pub struct Stray;

impl Variant<Shape> for Stray {
    const KIND: KindId = KindId::new(7);

    fn wrap(self) -> Shape {
        Shape::Cube(Cube::new(0.0))
    }

    fn project(_value: &Shape) -> Option<&Self> {
        None
    }
}

/// A hand-written set whose declaration repeats a kind.
#[derive(Debug)]
pub struct Repeated;

impl ClosedSet for Repeated {
    const NAME: &'static str = "Repeated";
    const KINDS: &'static [KindDescriptor] = &[
        KindDescriptor::new("Sphere", 0),
        KindDescriptor::new("Sphere", 1),
    ];

    fn kind(&self) -> KindId {
        KindId::new(0)
    }

    fn try_wrap<T: Any>(_value: T) -> Option<Self> {
        None
    }
}

/// A hand-written set with no kinds.
#[derive(Debug)]
pub struct Empty;

impl ClosedSet for Empty {
    const NAME: &'static str = "Empty";
    const KINDS: &'static [KindDescriptor] = &[];

    fn kind(&self) -> KindId {
        KindId::new(0)
    }

    fn try_wrap<T: Any>(_value: T) -> Option<Self> {
        None
    }
}
