use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use ark_serialize::*;
use ark_std::rand::Rng;
use ark_std::vec::Vec;
use zeroize::Zeroize;

/// A verification key in the PGHR13 SNARK.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    /// The number of public wires, excluding the constant wire.
    pub num_public: usize,
    /// The element `alpha_a * H`, where `H` is the generator of `E::G2`.
    pub alpha_a_g2: E::G2Affine,
    /// The element `alpha_b * G`, where `G` is the generator of `E::G1`.
    pub alpha_b_g1: E::G1Affine,
    /// The element `alpha_c * H` in `E::G2`.
    pub alpha_c_g2: E::G2Affine,
    /// The element `gamma * H` in `E::G2`.
    pub gamma_g2: E::G2Affine,
    /// The element `(beta * gamma) * G` in `E::G1`.
    pub beta_gamma_g1: E::G1Affine,
    /// The element `(beta * gamma) * H` in `E::G2`.
    pub beta_gamma_g2: E::G2Affine,
    /// The element `z(t) * H` in `E::G2`, where `z` vanishes on the
    /// constraint evaluation points and `t` is the secret point.
    pub z_g2: E::G2Affine,
    /// The elements `a_i(t) * G` in `E::G1` for the constant wire and every
    /// public wire; a prefix of the proving key's `a_query`.
    pub ic: Vec<E::G1Affine>,
}

impl<E: Pairing> Default for VerifyingKey<E> {
    fn default() -> Self {
        Self {
            num_public: 0,
            alpha_a_g2: E::G2Affine::default(),
            alpha_b_g1: E::G1Affine::default(),
            alpha_c_g2: E::G2Affine::default(),
            gamma_g2: E::G2Affine::default(),
            beta_gamma_g1: E::G1Affine::default(),
            beta_gamma_g2: E::G2Affine::default(),
            z_g2: E::G2Affine::default(),
            ic: Vec::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The prover key for the PGHR13 zkSNARK.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: Pairing> {
    /// The number of wires in the constraint system, including the constant
    /// wire.
    pub num_variables: usize,
    /// The number of public wires, excluding the constant wire.
    pub num_public: usize,
    /// The elements `a_i(t) * G` in `E::G1`.
    pub a_query: Vec<E::G1Affine>,
    /// The elements `b_i(t) * H` in `E::G2`.
    pub b_query: Vec<E::G2Affine>,
    /// The elements `c_i(t) * G` in `E::G1`.
    pub c_query: Vec<E::G1Affine>,
    /// The elements `alpha_a * a_i(t) * G` in `E::G1`.
    pub ap_query: Vec<E::G1Affine>,
    /// The elements `alpha_b * b_i(t) * G` in `E::G1`.
    pub bp_query: Vec<E::G1Affine>,
    /// The elements `alpha_c * c_i(t) * G` in `E::G1`.
    pub cp_query: Vec<E::G1Affine>,
    /// The elements `beta * (a_i + b_i + c_i)(t) * G` in `E::G1`.
    pub kp_query: Vec<E::G1Affine>,
    /// The elements `t^i * G` in `E::G1`, used to commit to the quotient
    /// polynomial without knowing `t`.
    pub h_query: Vec<E::G1Affine>,
}

////////////////////////////////////////////////////////////////////////////////

/// The secret scalars consumed by one setup run.
///
/// Disclosure or reuse of any of these values makes proofs forgeable or
/// leaks witness data, so this type neither serializes nor prints itself,
/// and its contents are zeroed on drop.
#[derive(Clone)]
pub struct ToxicWaste<F: PrimeField> {
    /// The secret point the QAP polynomials are evaluated at.
    pub t: F,
    /// Randomizer for the `A`-query knowledge elements.
    pub alpha_a: F,
    /// Randomizer for the `B`-query knowledge elements.
    pub alpha_b: F,
    /// Randomizer for the `C`-query knowledge elements.
    pub alpha_c: F,
    /// Randomizer for the `K`-query knowledge elements.
    pub beta: F,
    /// Randomizer for the public-input consistency elements.
    pub gamma: F,
    /// Per-variable coefficients folded into the `A` polynomials at the
    /// padding evaluation point.
    pub a_extra: Vec<F>,
    /// Padding coefficients for the `B` polynomials.
    pub b_extra: Vec<F>,
    /// Padding coefficients for the `C` polynomials.
    pub c_extra: Vec<F>,
}

impl<F: PrimeField> ToxicWaste<F> {
    /// Samples a fresh trapdoor for a constraint system with `num_variables`
    /// wires. Every scalar is drawn independently and uniformly, and no two
    /// setup runs may share any of them. `rng` must be cryptographically
    /// secure; a predictable trapdoor makes proofs forgeable.
    pub fn rand<R: Rng + ?Sized>(num_variables: usize, rng: &mut R) -> Self {
        Self {
            t: F::rand(rng),
            alpha_a: F::rand(rng),
            alpha_b: F::rand(rng),
            alpha_c: F::rand(rng),
            beta: F::rand(rng),
            gamma: F::rand(rng),
            a_extra: (0..num_variables).map(|_| F::rand(rng)).collect(),
            b_extra: (0..num_variables).map(|_| F::rand(rng)).collect(),
            c_extra: (0..num_variables).map(|_| F::rand(rng)).collect(),
        }
    }
}

impl<F: PrimeField> Zeroize for ToxicWaste<F> {
    fn zeroize(&mut self) {
        self.t.zeroize();
        self.alpha_a.zeroize();
        self.alpha_b.zeroize();
        self.alpha_c.zeroize();
        self.beta.zeroize();
        self.gamma.zeroize();
        for s in self.a_extra.iter_mut() {
            s.zeroize();
        }
        for s in self.b_extra.iter_mut() {
            s.zeroize();
        }
        for s in self.c_extra.iter_mut() {
            s.zeroize();
        }
    }
}

impl<F: PrimeField> Drop for ToxicWaste<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
