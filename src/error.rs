use ark_relations::r1cs::SynthesisError;
use ark_std::fmt;

/// Everything that can go wrong while generating a key pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The constraint system does not provide its constraint matrices; they
    /// are only materialized in setup mode or when a prover mode asks for
    /// them.
    MissingConstraintMatrices,
    /// The constraint system has no constraints, so there are no evaluation
    /// points to interpolate the QAP polynomials over.
    TooFewConstraints,
    /// A padding-scalar vector does not assign exactly one scalar to every
    /// variable of the constraint system.
    PaddingLengthMismatch {
        /// Number of variables in the constraint system.
        expected: usize,
        /// Length of the supplied padding vector.
        found: usize,
    },
    /// The Lagrange basis polynomial for the given evaluation point is zero
    /// at its own root, so its normalizer cannot be inverted.
    ZeroNormalizer(usize),
    /// The lifted `K`-query disagrees with the group sum of the `A`, `B` and
    /// `C` queries. This is a defect in the arithmetic, never a property of
    /// the input circuit.
    InconsistentKQuery,
    /// An error during constraint synthesis.
    SynthesisError(SynthesisError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingConstraintMatrices => {
                write!(f, "the constraint system does not provide its constraint matrices")
            },
            Error::TooFewConstraints => {
                write!(f, "the constraint system has no constraints")
            },
            Error::PaddingLengthMismatch { expected, found } => write!(
                f,
                "expected one padding scalar per variable ({}), but got {}",
                expected, found
            ),
            Error::ZeroNormalizer(index) => write!(
                f,
                "the Lagrange basis for evaluation point {} vanishes at its own root",
                index
            ),
            Error::InconsistentKQuery => {
                write!(f, "the K-query does not match the sum of the A, B and C queries")
            },
            Error::SynthesisError(e) => write!(f, "constraint synthesis failed: {}", e),
        }
    }
}

impl ark_std::error::Error for Error {}

impl From<SynthesisError> for Error {
    fn from(e: SynthesisError) -> Self {
        Error::SynthesisError(e)
    }
}
