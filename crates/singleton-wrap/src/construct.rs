/// Construction capability required of a wrapped type.
///
/// `Args` carries everything the one-time construction needs, typically as a
/// tuple when the underlying constructor takes several values. The `Default`
/// bound renders the zero-argument construction call: when a singleton is
/// first accessed without arguments and no preset arguments were configured,
/// it is constructed from `Args::default()`.
///
/// Extension of a base type is plain composition: embed the base in a new
/// struct, add the extra members, and implement `Construct` for the outer
/// type (usually delegating to the base's own `construct`).
pub trait Construct: Sized {
    /// Constructor arguments for the initial instantiation.
    type Args: Default;

    /// Builds the instance. Runs at most once per singleton.
    fn construct(args: Self::Args) -> Self;
}
