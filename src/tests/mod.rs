#![cfg(test)]

mod failure_tests;
