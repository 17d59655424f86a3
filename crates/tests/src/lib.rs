#[cfg(test)]
mod role_resolution_tests;

#[cfg(test)]
mod route_ownership_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod bootstrap_tests;

#[cfg(test)]
mod session_tests;
