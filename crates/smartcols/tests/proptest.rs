//! Property-based tests for column flags, duplication and colors.

use proptest::prelude::*;
use smartcols::{default_scheme, ColumnFlags, ColumnRef};

// ============================================================================
// Strategies
// ============================================================================

fn flags_strategy() -> impl Strategy<Value = [bool; 5]> {
    any::<[bool; 5]>()
}

fn apply(cl: &ColumnRef, flags: [bool; 5]) {
    cl.set_trunc(flags[0]);
    cl.set_tree(flags[1]);
    cl.set_right(flags[2]);
    cl.set_strict_width(flags[3]);
    cl.set_no_extremes(flags[4]);
}

fn read(cl: &ColumnRef) -> [bool; 5] {
    [
        cl.is_trunc(),
        cl.is_tree(),
        cl.is_right(),
        cl.is_strict_width(),
        cl.is_no_extremes(),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Each flag reads back exactly what was written, whatever the others are.
    #[test]
    fn flags_are_independent(initial in flags_strategy(), index in 0usize..5, value in any::<bool>()) {
        let cl = ColumnRef::new();
        apply(&cl, initial);

        let mut expected = initial;
        expected[index] = value;
        apply(&cl, expected);

        prop_assert_eq!(read(&cl), expected);
    }

    /// The bitmask view agrees with the individual flags.
    #[test]
    fn bitmask_matches_flags(bits in 0u32..32) {
        let flags = ColumnFlags::from_bits_truncate(bits);
        let cl = ColumnRef::new();
        cl.set_flags(flags);
        prop_assert_eq!(cl.flags(), flags);
        prop_assert_eq!(cl.is_tree(), flags.contains(ColumnFlags::TREE));
        prop_assert_eq!(cl.is_no_extremes(), flags.contains(ColumnFlags::NOEXTREMES));
    }

    /// Duplicates carry over hint, flags and header, and stay independent.
    #[test]
    fn duplicate_preserves_fields(
        hint in -1.0e6f64..1.0e6,
        flags in flags_strategy(),
        name in "[A-Z]{1,12}",
    ) {
        let src = ColumnRef::new();
        src.set_width_hint(hint);
        src.set_name(name.clone());
        apply(&src, flags);

        let dup = src.duplicate().unwrap();
        prop_assert_eq!(dup.width_hint(), hint);
        prop_assert_eq!(read(&dup), flags);
        prop_assert_eq!(dup.name(), Some(name.clone()));

        dup.set_name("other");
        apply(&dup, [!flags[0], !flags[1], !flags[2], !flags[3], !flags[4]]);
        prop_assert_eq!(src.name(), Some(name));
        prop_assert_eq!(read(&src), flags);
    }

    /// Literal colors are stored byte for byte.
    #[test]
    fn literal_colors_are_stored_verbatim(body in "[0-9;]{0,10}") {
        let literal = format!("\x1b[{}m", body);
        let cl = ColumnRef::new();
        cl.set_color(Some(literal.as_str())).unwrap();
        prop_assert_eq!(cl.color(), Some(literal));
    }

    /// A failed name lookup never changes the stored color.
    #[test]
    fn unknown_names_leave_color(name in "zz[a-z]{1,8}") {
        let cl = ColumnRef::new();
        cl.set_color(Some("cyan")).unwrap();
        prop_assert!(cl.set_color_with(Some(name.as_str()), default_scheme()).is_err());
        let color = cl.color();
        prop_assert_eq!(color.as_deref(), Some("\x1b[36m"));
    }
}
