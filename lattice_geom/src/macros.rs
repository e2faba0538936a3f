/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing path macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open polyline path through the points given as a list of (x, y, z) tuples.
///
/// # Examples
///
/// ```
/// # use lattice_geom::path_open;
/// # use lattice_geom::shape::*;
/// let path = path_open![(0, 0, 0), (2, 2, 0), (4, 0, 0)];
/// assert!(path.is_polyline());
/// assert!(!path.is_polygon());
/// assert_eq!(path.element_count(), 3);
/// ```
#[macro_export]
macro_rules! path_open {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path = $crate::shape::Path::with_capacity(size);
            $(
                path.push_point($x.0, $x.1, $x.2);
            )*
            path
        }
    };
}

/// Construct a closed polygon path through the points given as a list of (x, y, z) tuples.
///
/// # Examples
///
/// ```
/// # use lattice_geom::path_closed;
/// # use lattice_geom::shape::*;
/// let path = path_closed![(0, 0, 0), (4, 0, 0), (4, 4, 0)];
/// assert!(path.is_polygon());
/// assert_eq!(path.element_count(), 4);
/// ```
#[macro_export]
macro_rules! path_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut path = $crate::shape::Path::with_capacity(size + 1);
            $(
                path.push_point($x.0, $x.1, $x.2);
            )*
            path.close_if_started();
            path
        }
    };
}
