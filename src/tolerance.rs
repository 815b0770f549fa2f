/*
 * Comparison tolerance shared by the whole crate.
 *
 * Portions derived from Casey Duncan's Planar package. See the
 * copyright statement below.
 */

/*
 * Copyright (c) 2010 by Casey Duncan
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *
 * * Redistributions of source code must retain the above copyright notice,
 *   this list of conditions and the following disclaimer.
 * * Redistributions in binary form must reproduce the above copyright notice,
 *   this list of conditions and the following disclaimer in the documentation
 *   and/or other materials provided with the distribution.
 * * Neither the name(s) of the copyright holders nor the names of its
 *   contributors may be used to endorse or promote products derived from this
 *   software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AS IS AND ANY EXPRESS OR
 * IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF
 * MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO
 * EVENT SHALL THE COPYRIGHT HOLDERS BE LIABLE FOR ANY DIRECT, INDIRECT,
 * INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
 * LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA,
 * OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
 * LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
 * NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE,
 * EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Default epsilon value for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

static EPSILON_BITS: AtomicU64 = AtomicU64::new(DEFAULT_EPSILON.to_bits());

/// Get the current epsilon value
#[inline]
pub fn get_epsilon() -> f64 {
    f64::from_bits(EPSILON_BITS.load(Ordering::Relaxed))
}

/// Set the global absolute error used by approximate comparisons.
///
/// # Notes
///
/// The default of `1e-9` suits coordinates in the "countable range".
/// Figures with very large coordinates need a larger epsilon, otherwise
/// `almost_equals` will report round-trip results as different.
pub fn set_epsilon(epsilon: f64) {
    EPSILON_BITS.store(epsilon.abs().to_bits(), Ordering::Relaxed);
}

#[inline]
pub(crate) fn resolve(precision: Option<f64>) -> f64 {
    precision.unwrap_or_else(get_epsilon)
}
