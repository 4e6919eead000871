mod check_route_access;

pub use check_route_access::CheckRouteAccessUseCase;
