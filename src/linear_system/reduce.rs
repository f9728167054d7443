use tracing::trace;

use crate::{domains::ExactDomain, matrix::Matrix};

impl<F: ExactDomain> Matrix<F> {
    /// Divide row `row` by the gcd of its entries, so that its nonzero entries
    /// are coprime and its leading nonzero entry is positive. A zero row is left as is.
    ///
    /// Scaling a row by any nonzero constant does not change the result.
    pub fn simplify_row(&mut self, row: u32) {
        let field = self.field.clone();

        let mut gcd = field.zero();
        let mut negative = None;
        for e in self.row(row) {
            if F::is_zero(e) {
                continue;
            }

            if negative.is_none() {
                negative = Some(field.is_negative(e));
            }

            gcd = field.gcd(&gcd, &field.abs(e));
            if field.is_one(&gcd) {
                break;
            }
        }

        if negative == Some(true) {
            gcd = field.neg(&gcd);
        }

        if F::is_zero(&gcd) || field.is_one(&gcd) {
            return;
        }

        for e in self.row_mut(row) {
            if !F::is_zero(e) {
                *e = field.div_exact(e, &gcd);
            }
        }
    }

    /// Get the column of the first nonzero entry of row `row` among the first `max_col` columns.
    pub(crate) fn pivot_column(&self, row: u32, max_col: u32) -> Option<u32> {
        self.row(row)[..max_col as usize]
            .iter()
            .position(|e| !F::is_zero(e))
            .map(|c| c as u32)
    }

    /// Eliminate column `col` of row `target` using row `pivot`, without leaving the integers:
    /// with `g = gcd(p, t)` of the two entries in column `col`,
    /// `target = target * (p / g) - pivot * (t / g)`, followed by a normalization of `target`.
    fn cross_eliminate(&mut self, pivot: u32, target: u32, col: u32) {
        let field = self.field.clone();

        let p = &self[(pivot, col)];
        let t = &self[(target, col)];
        let g = field.gcd(p, t);
        let p_scale = field.div_exact(p, &g);
        let t_scale = field.div_exact(t, &g);

        trace!(pivot, target, col, "eliminating");

        for l in 0..self.ncols {
            let mut e = std::mem::replace(&mut self[(target, l)], field.zero());
            field.mul_assign(&mut e, &p_scale);
            field.sub_mul_assign(&mut e, &self[(pivot, l)], &t_scale);
            self[(target, l)] = e;
        }

        self.simplify_row(target);
    }

    /// Write the matrix in fraction-free echelon form, looking for pivots in the first `max_col`
    /// columns only. Columns without a pivot are skipped. Returns the number of pivots found.
    pub(crate) fn fraction_free_echelon(&mut self, max_col: u32) -> u32 {
        let mut i = 0;
        for j in 0..max_col {
            if i >= self.nrows {
                break;
            }

            // select the first non-zero pivot
            let k = match (i..self.nrows).find(|&k| !F::is_zero(&self[(k, j)])) {
                Some(k) => k,
                None => continue,
            };

            if k != i {
                trace!(row = i, with = k, "swapping rows");
                self.swap_rows(i, k);
            }

            for k in i + 1..self.nrows {
                // a zero entry would only be scaled by the sign of the pivot and renormalized
                if !F::is_zero(&self[(k, j)]) {
                    self.cross_eliminate(i, k, j);
                }
            }

            i += 1;
        }

        i
    }

    /// Turn a matrix in fraction-free echelon form into a reduced one, where every pivot column
    /// among the first `max_col` columns is zero outside of its pivot row.
    pub(crate) fn fraction_free_back_substitution(&mut self, max_col: u32) {
        let pivots: Vec<(u32, u32)> = (0..self.nrows)
            .filter_map(|r| self.pivot_column(r, max_col).map(|c| (r, c)))
            .collect();

        if pivots.is_empty() {
            return;
        }

        for i in (1..pivots.len()).rev() {
            let (row, col) = pivots[i];
            for &(earlier, _) in &pivots[..i] {
                if !F::is_zero(&self[(earlier, col)]) {
                    self.cross_eliminate(row, earlier, col);
                }
            }
        }
    }
}
