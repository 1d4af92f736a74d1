/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `(x) = x`
    /// `(2) = 2`
    UnwrapBracket,

    /// `(a/b) = a/b`
    UnwrapFraction,

    /// A sum or product with a single child is that child.
    CollapseSingleton,

    /// `a+(b+c) = a+b+c`
    /// `a*(b*c) = a*b*c`
    Flatten,

    /// `a+0 = a`
    /// `a*1 = a`
    RemoveIdentity,

    /// `a*0 = 0`
    MultiplyZero,

    /// `a+a = 2*a`
    /// `a*a = a^2`
    MergeLike,

    /// `1+2+x = 3+x`
    /// `2*x*3 = 6*x`
    FoldConstants,

    /// `2*(3/x) = (2*3)/x`
    AbsorbIntoFraction,

    /// `a/1 = a`
    UnitDenominator,

    /// `(a/b)/c = a/(b*c)`
    NestedNumerator,

    /// `c/(a/b) = (c*b)/a`
    NestedDenominator,

    /// `(a/b)/(c/d) = (a*d)/(b*c)`
    NestedBoth,

    /// `6/8 = 3/4`
    /// `2/-3 = -2/3`
    ReduceFraction,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,

    /// `2^3 = 8`
    FoldPower,

    /// `2^-3 = 1/2^3`
    NegativeExponent,

    /// `(2/3)^a = 2^a/3^a`
    DistributePower,

    /// `i^2 = -1`
    /// `i^3 = -1*i`
    /// `i^4 = 1`
    ImaginaryCycle,
}
