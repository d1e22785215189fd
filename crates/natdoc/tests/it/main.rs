mod abi;
mod interface;
mod natspec;
