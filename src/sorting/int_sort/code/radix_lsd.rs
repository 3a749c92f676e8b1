//! LSD radix sort for signed 32-bit integers.
//!
//! Four counting-sort passes over 8-bit digits, least significant first.
//! Every pass is stable, which is what makes the passes compose. The last
//! pass works on the sign byte and flips its top bit so that negative values
//! land in the low buckets.
//!
//! Complexity: O(n * k) with k = 4 passes, plus one auxiliary buffer of n.

/// Number of bits per digit (radix)
const RADIX_BITS: u32 = 8;
/// Number of buckets (2^RADIX_BITS)
const NUM_BUCKETS: usize = 1 << RADIX_BITS;
/// Mask for extracting a digit
const RADIX_MASK: i32 = (NUM_BUCKETS - 1) as i32;
/// Number of passes needed for 32-bit integers
const NUM_PASSES: u32 = i32::BITS / RADIX_BITS;
/// Shift of the most significant digit, the one holding the sign bit
const SIGN_SHIFT: u32 = (NUM_PASSES - 1) * RADIX_BITS;
/// XOR-ed into the sign digit to move negatives below non-negatives
const SIGN_FLIP: usize = 0x80;

/// Sort a slice in place using LSD radix sort.
///
/// # Example
/// ```
/// use sort_bench::sorting::int_sort::radix_lsd;
///
/// let mut data = [-5, 3, -1, 0, i32::MAX, i32::MIN];
/// radix_lsd::sort(&mut data);
/// assert_eq!(data, [i32::MIN, -5, -1, 0, 3, i32::MAX]);
/// ```
pub fn sort(data: &mut [i32]) {
    if data.len() <= 1 {
        return;
    }

    let mut output = vec![0i32; data.len()];
    let mut count = [0usize; NUM_BUCKETS];

    for pass in 0..NUM_PASSES {
        let shift = pass * RADIX_BITS;

        count.fill(0);
        for &value in data.iter() {
            count[bucket(value, shift)] += 1;
        }

        // Inclusive prefix sum: one past the last slot of each bucket
        for i in 1..NUM_BUCKETS {
            count[i] += count[i - 1];
        }

        // Walking backwards while counting down keeps equal digits in order
        for &value in data.iter().rev() {
            let digit = bucket(value, shift);
            count[digit] -= 1;
            output[count[digit]] = value;
        }

        data.copy_from_slice(&output);
    }
}

/// Bucket of `value` for the pass at `shift`.
#[inline(always)]
fn bucket(value: i32, shift: u32) -> usize {
    let digit = ((value >> shift) & RADIX_MASK) as usize;
    if shift == SIGN_SHIFT {
        digit ^ SIGN_FLIP
    } else {
        digit
    }
}
