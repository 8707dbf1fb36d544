use ark_ff::{PrimeField, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::{cfg_into_iter, cfg_iter_mut, vec};

use crate::{error::Error, Vec};
use ark_relations::r1cs::ConstraintSystemRef;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes reductions from R1CS instances to Quadratic Arithmetic Programs
/// (QAPs) in the form the key generator consumes.
pub trait R1CSToQAP {
    /// Computes a QAP instance corresponding to the R1CS instance defined by
    /// `cs`. The `*_extra` slices supply one secret coefficient per variable,
    /// folded into the matching polynomial family at the reserved padding
    /// point so that no variable interpolates to the zero polynomial.
    fn instance_map<F: PrimeField>(
        cs: ConstraintSystemRef<F>,
        a_extra: &[F],
        b_extra: &[F],
        c_extra: &[F],
    ) -> Result<QapPolynomials<F>, Error>;

    /// Computes the exponents that the generator uses to calculate base
    /// elements which the prover later uses to commit to the quotient
    /// polynomial `h(x) = (a(x) * b(x) - c(x)) / z(x)`.
    fn h_query_scalars<F: PrimeField>(num_powers: usize, t: F) -> Result<Vec<F>, Error>;
}

/// The per-variable polynomial families of a QAP instance, together with the
/// vanishing polynomial of its evaluation points.
#[derive(Clone, Debug, PartialEq)]
pub struct QapPolynomials<F: PrimeField> {
    /// For each variable `s`, the polynomial whose value at constraint index
    /// `i` is the coefficient of `s` in the `A` part of constraint `i`.
    pub a: Vec<DensePolynomial<F>>,
    /// The interpolations of the `B` columns.
    pub b: Vec<DensePolynomial<F>>,
    /// The interpolations of the `C` columns.
    pub c: Vec<DensePolynomial<F>>,
    /// The polynomial vanishing exactly on the real constraint indices.
    pub z: DensePolynomial<F>,
}

impl<F: PrimeField> QapPolynomials<F> {
    /// Number of powers of the secret point needed to commit to the quotient
    /// polynomial `(a * b - c) / z`, which has degree `num_h_powers() - 1`.
    pub fn num_h_powers(&self) -> usize {
        let longest = |family: &[DensePolynomial<F>]| {
            family.iter().map(|p| p.coeffs.len()).max().unwrap_or(0)
        };
        let max_full = (longest(&self.a) + longest(&self.b))
            .saturating_sub(1)
            .max(longest(&self.c));
        (max_full + 1).saturating_sub(self.z.coeffs.len())
    }
}

/// Computes the R1CS-to-QAP reduction by Lagrange interpolation over the
/// integer evaluation points `0..=num_constraints`. Every basis polynomial is
/// carved out of one shared vanishing polynomial by synthetic division; the
/// point at `num_constraints` is reserved for the padding coefficients.
pub struct LagrangeReduction;

impl R1CSToQAP for LagrangeReduction {
    #[inline]
    fn instance_map<F: PrimeField>(
        cs: ConstraintSystemRef<F>,
        a_extra: &[F],
        b_extra: &[F],
        c_extra: &[F],
    ) -> Result<QapPolynomials<F>, Error> {
        let matrices = cs.to_matrices().ok_or(Error::MissingConstraintMatrices)?;
        let num_constraints = cs.num_constraints();
        if num_constraints == 0 {
            return Err(Error::TooFewConstraints);
        }
        let num_variables = cs.num_instance_variables() + cs.num_witness_variables();
        for extra in [a_extra, b_extra, c_extra] {
            if extra.len() != num_variables {
                return Err(Error::PaddingLengthMismatch {
                    expected: num_variables,
                    found: extra.len(),
                });
            }
        }

        // One root per constraint, plus one reserved for the padding row.
        let scaffold = vanishing_polynomial::<F>(num_constraints + 1);

        let mut a: Vec<DensePolynomial<F>> = vec![DensePolynomial::zero(); num_variables];
        let mut b: Vec<DensePolynomial<F>> = vec![DensePolynomial::zero(); num_variables];
        let mut c: Vec<DensePolynomial<F>> = vec![DensePolynomial::zero(); num_variables];

        for i in 0..num_constraints {
            let (basis, normalizer) = lagrange_basis(&scaffold, i)?;
            for &(ref coeff, index) in &matrices.a[i] {
                a[index] += (normalizer * coeff, &basis);
            }
            for &(ref coeff, index) in &matrices.b[i] {
                b[index] += (normalizer * coeff, &basis);
            }
            for &(ref coeff, index) in &matrices.c[i] {
                c[index] += (normalizer * coeff, &basis);
            }
        }

        // The padding row folds a secret coefficient into every variable at
        // the reserved point. A variable untouched by any constraint would
        // otherwise interpolate to the zero polynomial, and its slot in the
        // proving key would reveal that it is unconstrained.
        let (basis, normalizer) = lagrange_basis(&scaffold, num_constraints)?;
        cfg_iter_mut!(a).zip(a_extra).for_each(|(p, extra)| {
            *p += (normalizer * extra, &basis);
        });
        cfg_iter_mut!(b).zip(b_extra).for_each(|(p, extra)| {
            *p += (normalizer * extra, &basis);
        });
        cfg_iter_mut!(c).zip(c_extra).for_each(|(p, extra)| {
            *p += (normalizer * extra, &basis);
        });

        // The QAP identity vanishes only on the real constraint indices; the
        // padding root belongs to the interpolation scaffold, not to `z`.
        let z = vanishing_polynomial::<F>(num_constraints);

        Ok(QapPolynomials { a, b, c, z })
    }

    fn h_query_scalars<F: PrimeField>(num_powers: usize, t: F) -> Result<Vec<F>, Error> {
        let scalars = cfg_into_iter!(0..num_powers)
            .map(|i| t.pow([i as u64]))
            .collect::<Vec<_>>();
        Ok(scalars)
    }
}

/// Divides the shared vanishing polynomial by `(x - i)` and returns the
/// quotient together with the scalar normalizing it to 1 at `i`.
fn lagrange_basis<F: PrimeField>(
    scaffold: &DensePolynomial<F>,
    i: usize,
) -> Result<(DensePolynomial<F>, F), Error> {
    let root = F::from(i as u64);
    let basis = divide_by_root(scaffold, root);
    let normalizer = basis
        .evaluate(&root)
        .inverse()
        .ok_or(Error::ZeroNormalizer(i))?;
    Ok((basis, normalizer))
}

/// Computes `(x - 0) * (x - 1) * ... * (x - (num_roots - 1))` one linear
/// factor at a time.
fn vanishing_polynomial<F: PrimeField>(num_roots: usize) -> DensePolynomial<F> {
    let mut coeffs = Vec::with_capacity(num_roots + 1);
    coeffs.push(F::one());
    for i in 0..num_roots {
        let root = F::from(i as u64);
        coeffs.push(F::zero());
        for j in (1..coeffs.len()).rev() {
            coeffs[j] = coeffs[j - 1] - root * coeffs[j];
        }
        coeffs[0] *= -root;
    }
    DensePolynomial::from_coefficients_vec(coeffs)
}

/// Divides `p` by `(x - root)` in linear time, discarding the remainder;
/// `root` must actually be a root of `p`.
fn divide_by_root<F: PrimeField>(p: &DensePolynomial<F>, root: F) -> DensePolynomial<F> {
    let mut quotient = vec![F::zero(); p.coeffs.len() - 1];
    let mut carry = F::zero();
    for i in (0..quotient.len()).rev() {
        carry = p.coeffs[i + 1] + root * carry;
        quotient[i] = carry;
    }
    DensePolynomial::from_coefficients_vec(quotient)
}
