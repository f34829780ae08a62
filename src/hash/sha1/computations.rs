pub use super::K160;

#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Boolean function `f_t` for round `t` (`t < 80`).
#[inline(always)]
pub fn round_function(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..20 => ch(b, c, d),
        40..60 => maj(b, c, d),
        _ => parity(b, c, d),
    }
}

/// Constant `K_t` for round `t` (`t < 80`).
#[inline(always)]
pub fn round_constant(t: usize) -> u32 {
    match t {
        0..20 => K160[0],
        20..40 => K160[1],
        40..60 => K160[2],
        _ => K160[3],
    }
}

/// Applies round `t` to the working variables `[a, b, c, d, e]`.
#[inline(always)]
pub fn round(t: usize, vars: &mut [u32; 5], wt: u32) {
    let [a, b, c, d, e] = *vars;

    let temp = a
        .rotate_left(5)
        .wrapping_add(round_function(t, b, c, d))
        .wrapping_add(e)
        .wrapping_add(round_constant(t))
        .wrapping_add(wt);

    *vars = [temp, a, b.rotate_left(30), c, d];
}

/// Runs the 80 rounds over `w` and adds the result into `state`.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; 80]) {
    let mut vars = *state;

    for (t, &wt) in w.iter().enumerate() {
        round(t, &mut vars, wt);
    }

    for (h, v) in state.iter_mut().zip(vars) {
        *h = h.wrapping_add(v);
    }
}

/// Runs the 80 rounds over `w` and adds the result into `state`.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; 80]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! R {
        ($f:ident, $k:expr; $($t:expr),+) => {$({
            let temp = a
                .rotate_left(5)
                .wrapping_add($f(b, c, d))
                .wrapping_add(e)
                .wrapping_add($k)
                .wrapping_add(w[$t]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        })+};
    }

    R!(ch, K160[0]; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19);
    R!(parity, K160[1]; 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39);
    R!(maj, K160[2]; 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59);
    R!(parity, K160[3]; 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
