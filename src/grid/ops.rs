// Copyright 2019 The array2d Project Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Elementwise operators.
//!
//! Binary operators between two grids produce a `Result`, since the operands may differ in
//! shape. Operators against a scalar are implemented for the primitive numeric types and
//! `bool`, in both operand orders. Integer division and remainder by zero panic exactly as they
//! do on the scalars.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use crate::error::ShapeError;
use crate::grid::Grid;

impl<'a, T: Clone + Neg<Output = T>> Neg for &'a Grid<T> {
    type Output = Grid<T>;

    fn neg(self) -> Grid<T> {
        self.map(|cell| -cell.clone())
    }
}

impl<T: Clone + Neg<Output = T>> Neg for Grid<T> {
    type Output = Grid<T>;

    fn neg(self) -> Grid<T> {
        -&self
    }
}

impl<'a, T: Clone + Not<Output = T>> Not for &'a Grid<T> {
    type Output = Grid<T>;

    fn not(self) -> Grid<T> {
        self.map(|cell| !cell.clone())
    }
}

impl<T: Clone + Not<Output = T>> Not for Grid<T> {
    type Output = Grid<T>;

    fn not(self) -> Grid<T> {
        !&self
    }
}

macro_rules! grid_binop {
    ($($trait:ident, $method:ident;)*) => {
        $(
            impl<'a, 'b, T> $trait<&'b Grid<T>> for &'a Grid<T>
            where
                T: Clone + $trait<Output = T>,
            {
                type Output = Result<Grid<T>, ShapeError>;

                fn $method(self, rhs: &'b Grid<T>) -> Self::Output {
                    self.map2(rhs, |left, right| left.clone().$method(right.clone()))
                }
            }

            impl<T> $trait<Grid<T>> for Grid<T>
            where
                T: Clone + $trait<Output = T>,
            {
                type Output = Result<Grid<T>, ShapeError>;

                fn $method(self, rhs: Grid<T>) -> Self::Output {
                    (&self).$method(&rhs)
                }
            }
        )*
    };
}

grid_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
    Rem, rem;
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
}

macro_rules! scalar_binop {
    ($trait:ident, $method:ident; $($ty:ident)*) => {
        $(
            impl<'a> $trait<$ty> for &'a Grid<$ty> {
                type Output = Grid<$ty>;

                fn $method(self, rhs: $ty) -> Grid<$ty> {
                    self.map(|cell| cell.$method(rhs))
                }
            }

            impl $trait<$ty> for Grid<$ty> {
                type Output = Grid<$ty>;

                fn $method(self, rhs: $ty) -> Grid<$ty> {
                    (&self).$method(rhs)
                }
            }

            impl<'a> $trait<&'a Grid<$ty>> for $ty {
                type Output = Grid<$ty>;

                fn $method(self, rhs: &'a Grid<$ty>) -> Grid<$ty> {
                    rhs.map(|cell| self.$method(*cell))
                }
            }
        )*
    };
}

macro_rules! arithmetic_scalar_ops {
    ($($ty:ident)*) => {
        scalar_binop!(Add, add; $($ty)*);
        scalar_binop!(Sub, sub; $($ty)*);
        scalar_binop!(Mul, mul; $($ty)*);
        scalar_binop!(Div, div; $($ty)*);
        scalar_binop!(Rem, rem; $($ty)*);
    };
}

macro_rules! logical_scalar_ops {
    ($($ty:ident)*) => {
        scalar_binop!(BitAnd, bitand; $($ty)*);
        scalar_binop!(BitOr, bitor; $($ty)*);
        scalar_binop!(BitXor, bitxor; $($ty)*);
    };
}

arithmetic_scalar_ops!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);
logical_scalar_ops!(bool i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! comparisons {
    ($bound:ident; $($grid_method:ident, $scalar_method:ident, $op:tt;)*) => {
        impl<T: $bound> Grid<T> {
            $(
                /// Compare every cell with the cell at the same position in `other`.
                pub fn $grid_method(&self, other: &Grid<T>) -> Result<Grid<bool>, ShapeError> {
                    self.map2(other, |left, right| left $op right)
                }

                /// Compare every cell with `value`.
                pub fn $scalar_method(&self, value: &T) -> Grid<bool> {
                    self.map(|cell| cell $op value)
                }
            )*
        }
    };
}

comparisons! {
    PartialEq;
    eq_elementwise, eq_scalar, ==;
    ne_elementwise, ne_scalar, !=;
}

comparisons! {
    PartialOrd;
    lt_elementwise, lt_scalar, <;
    le_elementwise, le_scalar, <=;
    gt_elementwise, gt_scalar, >;
    ge_elementwise, ge_scalar, >=;
}
