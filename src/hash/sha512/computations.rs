//! SHA-512 round functions and the 80-round loop.
//!
//! All arithmetic is modulo 2^64. Indices into the message window and the
//! constant table depend only on the round number, never on message data.

use super::K512;

#[inline(always)]
pub(crate) fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
pub(crate) fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
pub(crate) fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
pub(crate) fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub(crate) fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Computes schedule word `i` (i >= 16) in place inside the rolling window.
///
/// `w[i] = σ1(w[i-2]) + w[i-7] + σ0(w[i-15]) + w[i-16]`
#[inline(always)]
fn expand(w: &mut [u64; 16], i: usize) -> u64 {
    let w16 = w[(i - 16) & 15];
    let w15 = w[(i - 15) & 15];
    let w7 = w[(i - 7) & 15];
    let w2 = w[(i - 2) & 15];

    let next = small_sigma1(w2)
        .wrapping_add(w7)
        .wrapping_add(small_sigma0(w15))
        .wrapping_add(w16);

    w[i & 15] = next;
    next
}

/// Runs the 80 rounds over `w` and feeds the result forward into `state`.
///
/// `w` holds the first 16 schedule words; the remaining 64 are derived on
/// the fly in a 16-word rolling window.
#[cfg(not(feature = "speed"))]
pub(crate) fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (i, ki) in K512.iter().enumerate() {
        let wi = if i < 16 { w[i] } else { expand(&mut w, i) };

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    feed_forward(state, [a, b, c, d, e, f, g, h]);
}

#[cfg(feature = "speed")]
pub(crate) fn all_rounds(state: &mut [u64; 8], mut w: [u64; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    macro_rules! R {
        ($i:expr) => {{
            let wi = if $i < 16 {
                w[$i & 15]
            } else {
                expand(&mut w, $i)
            };

            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K512[$i])
                .wrapping_add(wi);

            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }};
    }

    macro_rules! R8 {
        ($base:expr) => {{
            R!($base);
            R!($base + 1);
            R!($base + 2);
            R!($base + 3);
            R!($base + 4);
            R!($base + 5);
            R!($base + 6);
            R!($base + 7);
        }};
    }

    R8!(0);
    R8!(8);
    R8!(16);
    R8!(24);
    R8!(32);
    R8!(40);
    R8!(48);
    R8!(56);
    R8!(64);
    R8!(72);

    feed_forward(state, [a, b, c, d, e, f, g, h]);
}

/// Davies–Meyer feed-forward.
#[inline(always)]
fn feed_forward(state: &mut [u64; 8], working: [u64; 8]) {
    for (s, v) in state.iter_mut().zip(working) {
        *s = s.wrapping_add(v);
    }
}
