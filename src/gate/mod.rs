use ndarray::{Array, ArrayBase, Data, Dimension, LinalgScalar};

/// Applies an element-wise **affine transformation** to the incoming data.
///
/// ```text
/// ʏ = a1 * x + b1
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AffineGate<A = f32> {
    pub units: usize,
    pub a1: A,
    pub b1: A,
}

impl<A> AffineGate<A>
where
    A: LinalgScalar,
{
    /// Creates an affine gate.
    ///
    /// # Arguments
    ///
    /// * `units` - size of each output sample. Stored for signature parity with the
    /// learnable layers; the transformation is element-wise and never consults it.
    ///
    /// * `a1` - multiplicative coefficient.
    ///
    /// * `b1` - additive coefficient.
    pub fn new(units: usize, a1: A, b1: A) -> Self {
        Self { units, a1, b1 }
    }

    /// Applies the affine transformation *y = a1 * x + b1* to the incoming data.
    ///
    /// # Arguments
    ///
    /// `input` - an array or view of any shape and of any numeric element type,
    /// the output's shape will be the same as the input's.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine_gate::AffineGate;
    /// use ndarray::array;
    ///
    /// let gate = AffineGate::new(1, 2., 1.);
    /// let output = gate.forward(&array![[1., 0.], [0., 1.]]);
    ///
    /// assert_eq!(output, array![[3., 1.], [1., 3.]]);
    /// ```
    pub fn forward<S, D>(&self, input: &ArrayBase<S, D>) -> Array<A, D>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        input.map(|&x| x * self.a1 + self.b1)
    }
}
