//! Unary, Binary and Assignment Operators
//!
//! All operator tags used in expression nodes. Each tag knows the symbol
//! the printer writes for it.

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the infix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Identity; printed as nothing.
    Plus,
    /// Negation.
    Minus,
}

impl UnaryOp {
    /// Returns the prefix symbol for this operator.
    ///
    /// Unary plus has an empty symbol: `+x` renders as `x`.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "",
            Self::Minus => "-",
        }
    }
}

/// Assignment operators: plain store plus the four compound forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    /// Overwrite the slot: `x <<= v`.
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOp {
    /// Returns the assignment symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Assign => "<<=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
        }
    }

    /// The arithmetic a compound assignment applies before storing.
    ///
    /// `None` for a plain store.
    pub const fn arith(self) -> Option<BinaryOp> {
        match self {
            Self::Assign => None,
            Self::Add => Some(BinaryOp::Add),
            Self::Sub => Some(BinaryOp::Sub),
            Self::Mul => Some(BinaryOp::Mul),
            Self::Div => Some(BinaryOp::Div),
        }
    }
}
