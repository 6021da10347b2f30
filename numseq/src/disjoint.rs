use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::num::FileNum;
use crate::sequence::ArithmeticSequence;

/// A sequence rescaled to integer start/end/step at a common power of ten.
struct Scaled {
    start: BigInt,
    end: BigInt,
    step: BigInt,
}

/// Whether two sequences share no member.
///
/// Writing both as `start + step * k`, a common member exists only when
/// `gcd(step_a, step_b)` divides `start_b - start_a`; the smallest common
/// term at least as large as both starts then decides the matter against the
/// inclusive end bounds.
pub(crate) fn is_disjoint<N: FileNum>(
    a: &ArithmeticSequence<N>,
    b: &ArithmeticSequence<N>,
) -> bool {
    if a.is_empty() || b.is_empty() {
        return true;
    }
    let (a, b) = rescale(a, b);

    let gcd = a.step.gcd(&b.step);
    let difference = &b.start - &a.start;
    if !(&difference % &gcd).is_zero() {
        return true;
    }

    // step_a * n ≡ difference (mod step_b) has the solutions
    // n ≡ (difference / gcd) * x (mod step_b / gcd), with x taken from
    // gcd = step_a * x + step_b * y.
    let extended = a.step.extended_gcd(&b.step);
    let period = &b.step / &gcd;
    let n = ((&difference / &gcd) * extended.x).mod_floor(&period);
    let first_common = &a.start + &a.step * n;

    // Advance by whole lcm periods up to the later of the two starts.
    let lcm = (&a.step / &gcd) * &b.step;
    let lower = a.start.max(b.start);
    let mut periods = (&lower - &first_common).div_ceil(&lcm);
    if periods.is_negative() {
        periods = BigInt::zero();
    }
    let smallest_common = first_common + periods * lcm;

    smallest_common > a.end.min(b.end)
}

fn rescale<N: FileNum>(a: &ArithmeticSequence<N>, b: &ArithmeticSequence<N>) -> (Scaled, Scaled) {
    let parts = [
        a.start().as_scaled_int(),
        a.end().as_scaled_int(),
        a.step().as_scaled_int(),
        b.start().as_scaled_int(),
        b.end().as_scaled_int(),
        b.step().as_scaled_int(),
    ];
    let scale = parts
        .iter()
        .map(|(_, scale)| *scale)
        .max()
        .unwrap_or_default();
    let mut scaled = parts
        .into_iter()
        .map(|(unscaled, part_scale)| unscaled * BigInt::from(10).pow(scale - part_scale));
    let mut next = || scaled.next().expect("six rescaled parts");
    (
        Scaled {
            start: next(),
            end: next(),
            step: next(),
        },
        Scaled {
            start: next(),
            end: next(),
            step: next(),
        },
    )
}
