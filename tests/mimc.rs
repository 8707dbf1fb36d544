#![warn(unused)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    variant_size_differences,
    stable_features,
    non_shorthand_field_patterns,
    renamed_and_removed_lints,
    unsafe_code
)]

// For randomness (during paramgen)
use ark_std::rand::Rng;

// For benchmarking
use std::time::Instant;

// Bring in some tools for using pairing-friendly curves
// We're going to use the BLS12-381 pairing-friendly elliptic curve.
use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::Field;
use ark_std::test_rng;

// We'll use these interfaces to construct our circuit.
use ark_relations::{
    lc, ns,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};

const MIMC_ROUNDS: usize = 322;

/// This is our demo circuit for proving knowledge of the
/// preimage of a MiMC hash invocation, specifically a
/// variant named `LongsightF322p3` for BLS12-381.
/// See http://eprint.iacr.org/2016/492 for more
/// information about this construction.
///
/// ```text
/// function LongsightF322p3(xL ⦂ Fp, xR ⦂ Fp) {
///     for i from 0 up to 321 {
///         xL, xR := xR + (xL + Ci)^3, xL
///     }
///     return xL
/// }
/// ```
struct MiMCDemo<'a, F: Field> {
    xl: Option<F>,
    xr: Option<F>,
    result: Option<F>,
    constants: &'a [F],
}

/// Our demo circuit implements this `ConstraintSynthesizer` trait
/// which is used during paramgen in order to synthesize the
/// constraint system.
impl<'a, F: Field> ConstraintSynthesizer<F> for MiMCDemo<'a, F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        assert_eq!(self.constants.len(), MIMC_ROUNDS);
        let result =
            cs.new_input_variable(|| self.result.ok_or(SynthesisError::AssignmentMissing))?;

        // Allocate the first component of the preimage.
        let mut xl_value = self.xl;
        let mut xl =
            cs.new_witness_variable(|| xl_value.ok_or(SynthesisError::AssignmentMissing))?;

        // Allocate the second component of the preimage.
        let mut xr_value = self.xr;
        let mut xr =
            cs.new_witness_variable(|| xr_value.ok_or(SynthesisError::AssignmentMissing))?;

        for i in 0..MIMC_ROUNDS {
            // xL, xR := xR + (xL + Ci)^3, xL
            let ns = ns!(cs, "round");
            let cs = ns.cs();

            // tmp = (xL + Ci)^2
            let tmp_val = xl_value.map(|e| (e + &self.constants[i]).square());
            let tmp =
                cs.new_witness_variable(|| tmp_val.ok_or(SynthesisError::AssignmentMissing))?;

            cs.enforce_constraint(
                lc!() + xl + (self.constants[i], Variable::One),
                lc!() + xl + (self.constants[i], Variable::One),
                lc!() + tmp,
            )?;

            // new_xL = xR + (xL + Ci)^3
            // new_xL = xR + tmp * (xL + Ci)
            // new_xL - xR = tmp * (xL + Ci)
            let new_xl_value =
                xl_value.and_then(|e| Some((e + &self.constants[i]) * tmp_val? + &xr_value?));

            let new_xl = if i == (MIMC_ROUNDS - 1) {
                // This is the last round, xL is our result and so
                // it was allocated as a public input above.
                result
            } else {
                cs.new_witness_variable(|| new_xl_value.ok_or(SynthesisError::AssignmentMissing))?
            };

            cs.enforce_constraint(
                lc!() + tmp,
                lc!() + xl + (self.constants[i], Variable::One),
                lc!() + new_xl - xr,
            )?;

            // xR = xL
            xr = xl;
            xr_value = xl_value;

            // xL = new_xL
            xl = new_xl;
            xl_value = new_xl_value;
        }

        Ok(())
    }
}

#[test]
fn test_mimc_setup() {
    use ark_pghr13::Pghr13;

    // This may not be cryptographically safe, use
    // `OsRng` (for example) in production software.
    let rng = &mut test_rng();

    // Generate the MiMC round constants
    let constants = (0..MIMC_ROUNDS).map(|_| rng.gen()).collect::<Vec<_>>();

    println!("Creating parameters...");

    // Create parameters for our circuit
    let start = Instant::now();
    let (pk, vk) = {
        let c = MiMCDemo::<Fr> {
            xl: None,
            xr: None,
            result: None,
            constants: &constants,
        };

        Pghr13::<Bls12_381>::generate_random_parameters(c, rng).unwrap()
    };
    println!("Setup time: {:?}", start.elapsed());

    // Two constraints per round.
    let num_constraints = 2 * MIMC_ROUNDS;
    // The constant wire and the image, the two preimage halves, one `tmp`
    // per round and one `new_xl` per round except the last.
    let num_variables = 2 + 2 + MIMC_ROUNDS + (MIMC_ROUNDS - 1);

    assert_eq!(pk.num_variables, num_variables);
    assert_eq!(pk.num_public, 1);
    assert_eq!(pk.a_query.len(), num_variables);
    assert_eq!(pk.b_query.len(), num_variables);
    assert_eq!(pk.c_query.len(), num_variables);
    assert_eq!(pk.ap_query.len(), num_variables);
    assert_eq!(pk.bp_query.len(), num_variables);
    assert_eq!(pk.cp_query.len(), num_variables);
    assert_eq!(pk.kp_query.len(), num_variables);
    assert_eq!(pk.h_query.len(), num_constraints + 1);

    assert_eq!(vk.num_public, 1);
    assert_eq!(vk.ic.len(), 2);
    assert_eq!(&pk.a_query[..vk.ic.len()], &vk.ic[..]);
}
