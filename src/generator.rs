use crate::{
    error::Error, r1cs_to_qap::R1CSToQAP, Pghr13, ProvingKey, ToxicWaste, Vec, VerifyingKey,
};
use ark_ec::{pairing::Pairing, scalar_mul::fixed_base::FixedBase, CurveGroup, Group};
use ark_ff::PrimeField;
use ark_poly::Polynomial;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal, SynthesisMode,
};
use ark_std::{cfg_iter, rand::Rng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<E: Pairing, QAP: R1CSToQAP> Pghr13<E, QAP> {
    /// Generates a proving key and a verification key for a circuit, sampling
    /// the whole trapdoor from `rng`.
    #[inline]
    pub fn generate_random_parameters<C>(
        circuit: C,
        rng: &mut impl Rng,
    ) -> Result<(ProvingKey<E>, VerifyingKey<E>), Error>
    where
        C: ConstraintSynthesizer<E::ScalarField>,
    {
        let cs = Self::synthesize_circuit(circuit)?;
        let num_variables = cs.num_instance_variables() + cs.num_witness_variables();
        let toxic = ToxicWaste::rand(num_variables, rng);
        Self::generate_parameters(cs, toxic)
    }

    /// Generates the key pair for a circuit from externally supplied toxic
    /// waste. Runs over the same circuit with the same scalars produce
    /// identical keys; the caller is responsible for destroying every other
    /// copy of `toxic` afterwards.
    pub fn generate_parameters_with_toxic_waste<C>(
        circuit: C,
        toxic: ToxicWaste<E::ScalarField>,
    ) -> Result<(ProvingKey<E>, VerifyingKey<E>), Error>
    where
        C: ConstraintSynthesizer<E::ScalarField>,
    {
        let cs = Self::synthesize_circuit(circuit)?;
        Self::generate_parameters(cs, toxic)
    }

    fn synthesize_circuit<C>(circuit: C) -> Result<ConstraintSystemRef<E::ScalarField>, Error>
    where
        C: ConstraintSynthesizer<E::ScalarField>,
    {
        let cs = ConstraintSystem::new_ref();
        cs.set_optimization_goal(OptimizationGoal::Constraints);
        cs.set_mode(SynthesisMode::Setup);

        // Synthesize the circuit.
        let synthesis_time = start_timer!(|| "Constraint synthesis");
        circuit.generate_constraints(cs.clone())?;
        end_timer!(synthesis_time);

        let lc_time = start_timer!(|| "Inlining LCs");
        cs.finalize();
        end_timer!(lc_time);

        Ok(cs)
    }

    fn generate_parameters(
        cs: ConstraintSystemRef<E::ScalarField>,
        toxic: ToxicWaste<E::ScalarField>,
    ) -> Result<(ProvingKey<E>, VerifyingKey<E>), Error> {
        let setup_time = start_timer!(|| "Pghr13::Generator");

        // Following is the mapping of symbols from the Pinocchio paper to
        // this implementation
        // s -> t
        // v_k(x), w_k(x), y_k(x) -> a, b, c
        // alpha_v, alpha_w, alpha_y -> alpha_a, alpha_b, alpha_c
        // t(x) -> z

        let num_instance_variables = cs.num_instance_variables();
        let num_public = num_instance_variables - 1;

        let reduction_time = start_timer!(|| "R1CS to QAP Instance Map");
        let qap = QAP::instance_map::<E::ScalarField>(
            cs,
            &toxic.a_extra,
            &toxic.b_extra,
            &toxic.c_extra,
        )?;
        end_timer!(reduction_time);

        let num_variables = qap.a.len();
        let num_h_powers = qap.num_h_powers();
        let t = toxic.t;

        // Evaluate every variable's polynomials at the secret point.
        let eval_time = start_timer!(|| "Evaluate QAP polynomials at t");
        let a = cfg_iter!(qap.a).map(|p| p.evaluate(&t)).collect::<Vec<_>>();
        let b = cfg_iter!(qap.b).map(|p| p.evaluate(&t)).collect::<Vec<_>>();
        let c = cfg_iter!(qap.c).map(|p| p.evaluate(&t)).collect::<Vec<_>>();
        let k = cfg_iter!(a)
            .zip(&b)
            .zip(&c)
            .map(|((a, b), c)| *a + b + c)
            .collect::<Vec<_>>();
        let zt = qap.z.evaluate(&t);
        end_timer!(eval_time);

        // Exponents of the knowledge commitments.
        let ap = cfg_iter!(a).map(|a| toxic.alpha_a * a).collect::<Vec<_>>();
        let bp = cfg_iter!(b).map(|b| toxic.alpha_b * b).collect::<Vec<_>>();
        let cp = cfg_iter!(c).map(|c| toxic.alpha_c * c).collect::<Vec<_>>();
        let kp = cfg_iter!(k).map(|k| toxic.beta * k).collect::<Vec<_>>();

        let h_scalars = QAP::h_query_scalars::<E::ScalarField>(num_h_powers, t)?;
        drop(qap);

        let g1_generator = E::G1::generator();
        let g2_generator = E::G2::generator();
        let scalar_bits = E::ScalarField::MODULUS_BIT_SIZE as usize;

        // Compute G1 window table
        let g1_window_time = start_timer!(|| "Compute G1 window table");
        let num_g1_scalars = 8 * num_variables + num_h_powers;
        let g1_window = FixedBase::get_mul_window_size(num_g1_scalars);
        let g1_table = FixedBase::get_window_table::<E::G1>(scalar_bits, g1_window, g1_generator);
        end_timer!(g1_window_time);

        // Compute G2 window table
        let g2_window_time = start_timer!(|| "Compute G2 window table");
        let g2_window = FixedBase::get_mul_window_size(num_variables);
        let g2_table = FixedBase::get_window_table::<E::G2>(scalar_bits, g2_window, g2_generator);
        end_timer!(g2_window_time);

        // Generate the R1CS proving key
        let proving_key_time = start_timer!(|| "Generate the R1CS proving key");

        // Compute the A-query
        let a_time = start_timer!(|| "Calculate A");
        let a_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &a);
        drop(a);
        end_timer!(a_time);

        // Compute the B-query in both groups
        let b_time = start_timer!(|| "Calculate B G1 and B G2");
        let b_g1_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &b);
        let b_g2_query = FixedBase::msm::<E::G2>(scalar_bits, g2_window, &g2_table, &b);
        drop(g2_table);
        drop(b);
        end_timer!(b_time);

        // Compute the C-query
        let c_time = start_timer!(|| "Calculate C");
        let c_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &c);
        drop(c);
        end_timer!(c_time);

        // Compute the K-query
        let k_time = start_timer!(|| "Calculate K");
        let k_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &k);
        drop(k);
        end_timer!(k_time);

        // The lifted K-query must match the group sum of the A, B and C
        // queries for every variable.
        let consistent = cfg_iter!(k_query)
            .zip(&a_query)
            .zip(&b_g1_query)
            .zip(&c_query)
            .all(|(((k, a), b), c)| *k == *a + b + c);
        if !consistent {
            return Err(Error::InconsistentKQuery);
        }
        drop(k_query);
        drop(b_g1_query);

        // Compute the knowledge-commitment queries
        let shifted_time = start_timer!(|| "Calculate A', B', C' and K'");
        let ap_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &ap);
        let bp_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &bp);
        let cp_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &cp);
        let kp_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &kp);
        end_timer!(shifted_time);

        // Compute the H-query
        let h_time = start_timer!(|| "Calculate H");
        let h_query = FixedBase::msm::<E::G1>(scalar_bits, g1_window, &g1_table, &h_scalars);
        drop(g1_table);
        end_timer!(h_time);

        end_timer!(proving_key_time);

        // Generate R1CS verification key
        let verifying_key_time = start_timer!(|| "Generate the R1CS verification key");
        let beta_gamma = toxic.beta * &toxic.gamma;
        let alpha_a_g2 = g2_generator * &toxic.alpha_a;
        let alpha_b_g1 = g1_generator * &toxic.alpha_b;
        let alpha_c_g2 = g2_generator * &toxic.alpha_c;
        let gamma_g2 = g2_generator * &toxic.gamma;
        let beta_gamma_g1 = g1_generator * &beta_gamma;
        let beta_gamma_g2 = g2_generator * &beta_gamma;
        let z_g2 = g2_generator * &zt;
        end_timer!(verifying_key_time);

        drop(toxic);

        let batch_normalization_time = start_timer!(|| "Convert proving key elements to affine");
        let a_query = E::G1::normalize_batch(&a_query);
        let b_query = E::G2::normalize_batch(&b_g2_query);
        let c_query = E::G1::normalize_batch(&c_query);
        let ap_query = E::G1::normalize_batch(&ap_query);
        let bp_query = E::G1::normalize_batch(&bp_query);
        let cp_query = E::G1::normalize_batch(&cp_query);
        let kp_query = E::G1::normalize_batch(&kp_query);
        let h_query = E::G1::normalize_batch(&h_query);
        end_timer!(batch_normalization_time);

        // Wires up to and including the public ones are the verifier's share
        // of the A-query.
        let ic = a_query[..num_instance_variables].to_vec();

        let vk = VerifyingKey::<E> {
            num_public,
            alpha_a_g2: alpha_a_g2.into_affine(),
            alpha_b_g1: alpha_b_g1.into_affine(),
            alpha_c_g2: alpha_c_g2.into_affine(),
            gamma_g2: gamma_g2.into_affine(),
            beta_gamma_g1: beta_gamma_g1.into_affine(),
            beta_gamma_g2: beta_gamma_g2.into_affine(),
            z_g2: z_g2.into_affine(),
            ic,
        };

        end_timer!(setup_time);

        Ok((
            ProvingKey {
                num_variables,
                num_public,
                a_query,
                b_query,
                c_query,
                ap_query,
                bp_query,
                cp_query,
                kp_query,
                h_query,
            },
            vk,
        ))
    }
}
